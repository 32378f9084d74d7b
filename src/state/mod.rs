// ============================================================================
// STATE MODULE - shared state with Rc<RefCell> + notifications
// ============================================================================

pub mod reactivity;
pub mod session;

pub use reactivity::{SubscriptionId, Subscribers};
pub use session::{LogoutReason, Session};
