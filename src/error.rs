use thiserror::Error;

/// Failures surfaced by the API client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("request build error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        if status == 401 {
            ApiError::Unauthorized
        } else {
            ApiError::Status {
                status,
                message: message.into(),
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_maps_to_unauthorized() {
        assert_eq!(ApiError::from_status(401, "nope"), ApiError::Unauthorized);
        assert!(ApiError::from_status(401, "").is_unauthorized());
    }

    #[test]
    fn other_statuses_keep_code_and_message() {
        let err = ApiError::from_status(422, "bad risk");
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 422: bad risk");
    }
}
