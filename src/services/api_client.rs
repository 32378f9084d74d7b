// ============================================================================
// API CLIENT - backend endpoints + bearer interceptor
// ============================================================================
// Stateless apart from its configuration: the token is read from the
// TokenStore on every request.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, Recommendation, RecommendationRequest, RecommendationResponse,
    SavedPortfolio, SignupRequest,
};
use crate::services::http::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::services::storage::TokenStore;

pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGIN_PATH: &str = "/auth/login";
pub const RECOMMEND_PATH: &str = "/recommend";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    tokens: Rc<dyn TokenStore>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && Rc::ptr_eq(&self.transport, &other.transport)
            && Rc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        tokens: Rc<dyn TokenStore>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            tokens,
        }
    }

    /// Browser client pointed at the configured backend.
    pub fn from_config(config: &AppConfig, tokens: Rc<dyn TokenStore>) -> Self {
        Self::new(config.base_url(), Rc::new(GlooTransport), tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request interceptor: attach the persisted token, if any.
    fn authorize(&self, request: &mut HttpRequest) {
        if let Some(token) = self.tokens.load().filter(|t| !t.is_empty()) {
            request.set_header("Authorization", format!("Bearer {}", token));
        }
    }

    async fn execute(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.authorize(&mut request);
        let response = self.transport.send(request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_status(response.status, error_message(&response)))
        }
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = HttpRequest::new(HttpMethod::Post, self.url(path)).with_body(body);
        self.execute(request).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let request = HttpRequest::new(HttpMethod::Get, self.url(path));
        self.execute(request).await?.json()
    }

    /// `POST /auth/signup`. The response body is not used.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        log::info!("📝 Signing up {}", request.email);
        self.post(SIGNUP_PATH, request).await.map(|_| ())
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Logging in {}", request.email);
        self.post(LOGIN_PATH, request).await?.json()
    }

    /// `POST /recommend`
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, ApiError> {
        log::info!(
            "📈 Requesting recommendation: budget={} horizon={} risk={} fund_type={}",
            request.budget,
            request.horizon,
            request.risk,
            request.fund_type
        );
        let response: RecommendationResponse = self.post(RECOMMEND_PATH, request).await?.json()?;
        let recommendation = response.into_recommendation();
        log::info!(
            "✅ Recommendation received: {} holdings, {} history points",
            recommendation.allocations.len(),
            recommendation.history.len()
        );
        Ok(recommendation)
    }

    /// `GET /recommend`, previously generated portfolios of the current user.
    pub async fn saved_portfolios(&self) -> Result<Vec<SavedPortfolio>, ApiError> {
        log::info!("📚 Loading saved portfolios");
        self.get_json(RECOMMEND_PATH).await
    }
}

/// FastAPI puts error text under `detail`; anything else is passed through.
fn error_message(response: &HttpResponse) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&response.body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    if response.body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        response.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FundType;
    use crate::services::storage::MemoryTokenStore;
    use crate::services::testing::MockTransport;

    fn client(transport: &Rc<MockTransport>, tokens: Rc<MemoryTokenStore>) -> ApiClient {
        ApiClient::new("http://api.test/", transport.clone(), tokens)
    }

    fn sample_request() -> RecommendationRequest {
        RecommendationRequest {
            budget: 5000.0,
            horizon: 3,
            risk: 4,
            fund_type: FundType::Stocks,
            preferences: vec!["tech".to_string()],
            broker: None,
        }
    }

    #[tokio::test]
    async fn bearer_header_is_attached_when_token_present() {
        let transport = Rc::new(MockTransport::new());
        transport.push_json(200, r#"{"holdings": []}"#);
        let api = client(&transport, Rc::new(MemoryTokenStore::with_token("abc")));

        api.recommend(&sample_request()).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/recommend");
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.header("Authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn no_header_without_token() {
        let transport = Rc::new(MockTransport::new());
        transport.push_json(200, r#"{"access_token": "t"}"#);
        let api = client(&transport, Rc::new(MemoryTokenStore::new()));

        api.login(&LoginRequest {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(
            sent.body,
            Some(serde_json::json!({"email": "a@b.c", "password": "pw"}))
        );
    }

    #[tokio::test]
    async fn token_is_read_at_request_time() {
        let transport = Rc::new(MockTransport::new());
        transport.push_json(200, "[]");
        transport.push_json(200, "[]");
        let tokens = Rc::new(MemoryTokenStore::new());
        let api = client(&transport, tokens.clone());

        api.saved_portfolios().await.unwrap();
        assert_eq!(transport.last_request().unwrap().header("Authorization"), None);

        tokens.save("fresh").unwrap();
        api.saved_portfolios().await.unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.header("Authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn error_statuses_are_classified() {
        let transport = Rc::new(MockTransport::new());
        transport.push_json(401, r#"{"detail": "Could not validate credentials"}"#);
        transport.push_json(400, r#"{"detail": "Email already registered"}"#);
        transport.push_json(500, "");
        let api = client(&transport, Rc::new(MemoryTokenStore::with_token("stale")));

        assert_eq!(
            api.recommend(&sample_request()).await,
            Err(ApiError::Unauthorized)
        );

        let signup = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(
            api.signup(&signup).await,
            Err(ApiError::Status {
                status: 400,
                message: "Email already registered".to_string()
            })
        );
        assert_eq!(
            api.saved_portfolios().await,
            Err(ApiError::Status {
                status: 500,
                message: "Unknown error".to_string()
            })
        );
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let transport = Rc::new(MockTransport::new());
        transport.push_error(ApiError::Network("offline".to_string()));
        let api = client(&transport, Rc::new(MemoryTokenStore::new()));

        assert_eq!(
            api.recommend(&sample_request()).await,
            Err(ApiError::Network("offline".to_string()))
        );
    }

    #[tokio::test]
    async fn signup_ignores_response_body() {
        let transport = Rc::new(MockTransport::new());
        transport.push_json(201, "not json");
        let api = client(&transport, Rc::new(MemoryTokenStore::new()));

        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(api.signup(&request).await, Ok(()));
        assert_eq!(transport.last_request().unwrap().url, "http://api.test/auth/signup");
    }
}
