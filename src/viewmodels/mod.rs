pub mod auth_viewmodel;
pub mod charts;
pub mod dashboard_viewmodel;

pub use auth_viewmodel::{AuthViewModel, SubmitStatus};
pub use charts::{line_chart, pie_chart, ChartConfig, ChartKind};
pub use dashboard_viewmodel::{
    should_reload_saved, DashboardAction, DashboardForm, DashboardState, DashboardViewModel,
};
