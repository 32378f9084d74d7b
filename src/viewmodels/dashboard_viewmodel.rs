// ============================================================================
// DASHBOARD VIEWMODEL - preferences form + generate flow
// ============================================================================
// State changes go through DashboardState::apply so the yew reducer and the
// tests share the exact same transitions:
//   idle -> loading -> (success | error) -> idle
// ============================================================================

use crate::error::ApiError;
use crate::models::{FundType, Recommendation, RecommendationRequest, SavedPortfolio};
use crate::services::ApiClient;
use crate::state::Session;
use crate::utils::constants::{
    DEFAULT_BUDGET, DEFAULT_HORIZON_YEARS, DEFAULT_RISK, GENERIC_ERROR_MESSAGE, MAX_RISK, MIN_RISK,
    NO_RECOMMENDATIONS_MESSAGE,
};

/// `Number(input)` coercion: blank or unparsable input becomes 0.
pub fn coerce_number(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn coerce_whole(input: &str, max: f64) -> f64 {
    coerce_number(input).trunc().clamp(0.0, max)
}

/// Comma separated free text, blanks dropped.
pub fn parse_preferences(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// An open past-portfolios list is reloaded after each new recommendation;
/// a list the user never opened stays closed.
pub fn should_reload_saved(list_loaded: bool, revision: u64) -> bool {
    list_loaded && revision > 0
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardForm {
    pub budget: f64,
    pub horizon: u32,
    pub risk: u8,
    pub fund_type: FundType,
    pub preferences: String,
    pub broker: String,
}

impl Default for DashboardForm {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            horizon: DEFAULT_HORIZON_YEARS,
            risk: DEFAULT_RISK,
            fund_type: FundType::default(),
            preferences: String::new(),
            broker: String::new(),
        }
    }
}

impl DashboardForm {
    pub fn to_request(&self) -> RecommendationRequest {
        let broker = self.broker.trim();
        RecommendationRequest {
            budget: self.budget,
            horizon: self.horizon,
            risk: self.risk,
            fund_type: self.fund_type,
            preferences: parse_preferences(&self.preferences),
            broker: (!broker.is_empty()).then(|| broker.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetBudget(String),
    SetHorizon(String),
    SetRisk(String),
    SetFundType(String),
    SetPreferences(String),
    SetBroker(String),
    Started { ticket: u64 },
    Finished {
        ticket: u64,
        result: Result<Recommendation, ApiError>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub form: DashboardForm,
    pub allocations: Vec<crate::models::Allocation>,
    pub history: Vec<crate::models::HistoryPoint>,
    pub generated_at: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Ticket of the latest generate request.
    pub ticket: u64,
    /// Bumped on every successful generate.
    pub revision: u64,
}

impl DashboardState {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SetBudget(raw) => self.form.budget = coerce_number(&raw),
            DashboardAction::SetHorizon(raw) => {
                self.form.horizon = coerce_whole(&raw, u32::MAX as f64) as u32
            }
            DashboardAction::SetRisk(raw) => {
                let risk = coerce_whole(&raw, MAX_RISK as f64) as u8;
                self.form.risk = risk.clamp(MIN_RISK, MAX_RISK);
            }
            DashboardAction::SetFundType(raw) => match raw.parse::<FundType>() {
                Ok(fund_type) => self.form.fund_type = fund_type,
                Err(e) => log::warn!("⚠️ Ignoring fund type: {}", e),
            },
            DashboardAction::SetPreferences(raw) => self.form.preferences = raw,
            DashboardAction::SetBroker(raw) => self.form.broker = raw,
            DashboardAction::Started { ticket } => {
                self.ticket = ticket;
                self.loading = true;
                self.error = None;
                self.notice = None;
            }
            DashboardAction::Finished { ticket, result } => {
                if ticket != self.ticket {
                    log::debug!("Dropping stale recommendation #{} (latest #{})", ticket, self.ticket);
                    return;
                }
                self.loading = false;
                match result {
                    Ok(recommendation) => {
                        self.allocations = recommendation.allocations;
                        self.history = recommendation.history;
                        self.generated_at = recommendation.generated_at;
                        self.revision += 1;
                        if self.allocations.is_empty() {
                            self.notice = Some(NO_RECOMMENDATIONS_MESSAGE.to_string());
                        }
                    }
                    // Previous results stay on screen; a 401 has already
                    // ended the session and the login screen explains it
                    Err(_) => {
                        self.error = Some(GENERIC_ERROR_MESSAGE.to_string());
                    }
                }
            }
        }
    }

    /// `Started` action and request for a generate under `ticket`;
    /// `None` while a previous one is still in flight.
    pub fn prepare_generate(&self, ticket: u64) -> Option<(DashboardAction, RecommendationRequest)> {
        if self.loading {
            return None;
        }
        Some((DashboardAction::Started { ticket }, self.form.to_request()))
    }

    pub fn has_results(&self) -> bool {
        !self.allocations.is_empty()
    }

    pub fn show_pie_chart(&self) -> bool {
        self.has_results()
    }

    pub fn show_line_chart(&self) -> bool {
        self.has_results() && !self.history.is_empty()
    }
}

pub struct DashboardViewModel {
    api: ApiClient,
    session: Session,
}

impl DashboardViewModel {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    /// `POST /recommend`; a 401 ends the session.
    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, ApiError> {
        let result = self.api.recommend(request).await;
        if let Err(e) = &result {
            log::error!("❌ Recommendation failed: {}", e);
            self.expire_on_unauthorized(e);
        }
        result
    }

    /// Sends the request prepared under `ticket` and returns its `Finished` action.
    pub async fn generate(&self, ticket: u64, request: RecommendationRequest) -> DashboardAction {
        let result = self.recommend(&request).await;
        DashboardAction::Finished { ticket, result }
    }

    /// `GET /recommend`; returns a user-visible message on failure.
    pub async fn saved_portfolios(&self) -> Result<Vec<SavedPortfolio>, String> {
        match self.api.saved_portfolios().await {
            Ok(portfolios) => Ok(portfolios),
            Err(e) => {
                log::error!("❌ Loading saved portfolios failed: {}", e);
                self.expire_on_unauthorized(&e);
                Err(GENERIC_ERROR_MESSAGE.to_string())
            }
        }
    }

    fn expire_on_unauthorized(&self, error: &ApiError) {
        if error.is_unauthorized() && self.session.is_authenticated() {
            log::warn!("⚠️ Token rejected by backend, logging out");
            self.session.expire();
        }
    }
}
