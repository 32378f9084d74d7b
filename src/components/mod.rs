pub mod app;
pub mod chart_canvas;
pub mod dashboard_view;
pub mod header;
pub mod login_view;
pub mod saved_portfolios;
pub mod signup_view;

pub use app::App;
pub use chart_canvas::ChartCanvas;
pub use dashboard_view::DashboardView;
pub use header::Header;
pub use login_view::LoginView;
pub use saved_portfolios::SavedPortfolios;
pub use signup_view::SignupView;
