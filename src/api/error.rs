//! API Error Types
//!
//! Client-side failure taxonomy for calls to the Summoner's Chronicle API.

use thiserror::Error;

/// API error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No API endpoint configured for this deployment
    #[error("API endpoint is not configured")]
    Config,

    /// The request never reached the server
    #[error("Network error: {0}")]
    Network(String),

    /// The server rejected the request; message comes from the response
    /// payload or a per-endpoint fallback
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Session token is missing or expired (HTTP 401)
    #[error("Not authenticated")]
    Unauthorized,

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// True when the session should be cleared and the user sent back to
    /// the auth page.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = ApiError::Api {
            status: 400,
            message: "Summoner not found".to_string(),
        };
        assert_eq!(err.to_string(), "Summoner not found");
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Config.is_unauthorized());
        assert!(!ApiError::Api { status: 500, message: "boom".into() }.is_unauthorized());
    }
}
