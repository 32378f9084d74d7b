// ============================================================================
// AUTH VIEWMODEL - login / signup flows
// ============================================================================
// Returns the route to navigate to, or a user-visible message. The views
// only render.
// ============================================================================

use crate::error::ApiError;
use crate::models::{LoginRequest, SignupRequest};
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::Session;
use crate::utils::constants::{GENERIC_ERROR_MESSAGE, INVALID_CREDENTIALS_MESSAGE};

/// Loading flag + error message of a form with a single submit action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitStatus {
    pub loading: bool,
    pub error: Option<String>,
}

impl SubmitStatus {
    /// Returns false when a submit is already pending.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn finish<T>(&mut self, result: &Result<T, String>) {
        self.loading = false;
        self.error = result.as_ref().err().cloned();
    }
}

pub struct AuthViewModel {
    api: ApiClient,
    session: Session,
}

impl AuthViewModel {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    /// On success the token is stored in the session and the dashboard is next.
    pub async fn login(&self, email: String, password: String) -> Result<Route, String> {
        let request = LoginRequest { email, password };

        let response = self.api.login(&request).await.map_err(|e| {
            log::error!("❌ Login failed: {}", e);
            login_error_message(&e)
        })?;

        if response.access_token.is_empty() {
            log::error!("❌ Login response carried an empty token");
            return Err(GENERIC_ERROR_MESSAGE.to_string());
        }

        self.session.login(&response.access_token);
        Ok(Route::Dashboard)
    }

    /// On success the login screen is next; no token is issued by signup.
    pub async fn signup(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<Route, String> {
        let request = SignupRequest {
            name,
            email,
            password,
        };

        match self.api.signup(&request).await {
            Ok(()) => {
                log::info!("✅ Account created for {}", request.email);
                Ok(Route::Login)
            }
            Err(e) => {
                log::error!("❌ Signup failed: {}", e);
                Err(GENERIC_ERROR_MESSAGE.to_string())
            }
        }
    }
}

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => INVALID_CREDENTIALS_MESSAGE.to_string(),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}
