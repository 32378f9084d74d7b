/// localStorage key holding the bearer token.
pub const STORAGE_KEY_TOKEN: &str = "token";

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found. Try adjusting your preferences.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created. You can sign in now.";

// Dashboard form defaults
pub const DEFAULT_BUDGET: f64 = 10_000.0;
pub const DEFAULT_HORIZON_YEARS: u32 = 5;
pub const DEFAULT_RISK: u8 = 5;
pub const MIN_RISK: u8 = 1;
pub const MAX_RISK: u8 = 10;

// Canvas ids the chart bridge draws into
pub const PIE_CHART_CANVAS_ID: &str = "allocation-chart";
pub const LINE_CHART_CANVAS_ID: &str = "history-chart";
