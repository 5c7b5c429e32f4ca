//! Internal error types for Gemini operations.
//!
//! These errors are mapped to [`SynthesisError`](lectern_core::SynthesisError)
//! at the port boundary.

use thiserror::Error;

/// Result type alias for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

/// Errors related to Gemini API operations.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key configured. Raised before any request is built.
    #[error("No API key configured for the speech service")]
    MissingApiKey,

    /// The API answered with a non-success status.
    #[error("Gemini API request failed with status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the error envelope, or the raw body
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let error = GeminiError::Api {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("exhausted"));
    }

    #[test]
    fn test_missing_key_message() {
        assert!(GeminiError::MissingApiKey.to_string().contains("API key"));
    }

    #[test]
    fn test_url_error_converts() {
        let err: GeminiError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, GeminiError::InvalidUrl(_)));
    }
}
