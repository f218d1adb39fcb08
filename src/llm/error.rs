//! Reasoning-gateway error types

use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Missing API key: environment variable {0} is not set")]
    MissingApiKey(String),

    #[error("Provider returned no completion text")]
    EmptyCompletion,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether this failure came from the provider rejecting the request
    /// (as opposed to transport-level trouble)
    pub fn is_provider_rejection(&self) -> bool {
        matches!(self, LlmError::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_provider_rejection() {
        let err = LlmError::Api { status: 401, message: "bad key".to_string() };
        assert!(err.is_provider_rejection());
        assert!(!LlmError::EmptyCompletion.is_provider_rejection());
    }

    #[test]
    fn test_display_includes_status() {
        let err = LlmError::Api { status: 503, message: "overloaded".to_string() };
        assert_eq!(err.to_string(), "API error 503: overloaded");
    }
}
