pub mod use_auth;
pub mod use_dashboard;
pub mod use_session;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_dashboard::{use_dashboard, use_saved_portfolios, UseDashboardHandle, UseSavedPortfoliosHandle};
pub use use_session::{use_is_authenticated, use_route, UseRouteHandle};
