pub mod auth;
pub mod recommendation;

pub use auth::{LoginRequest, LoginResponse, SignupRequest};
pub use recommendation::{
    Allocation, FundType, HistoryPoint, Recommendation, RecommendationRequest,
    RecommendationResponse, SavedPortfolio, format_timestamp,
};
