//! Error types for the Gemini client.
//!
//! Provider and transport failures are converted into a single [`GenAiError`]
//! type. Variants store stringified messages rather than wrapping source
//! errors, so callers get uniform handling without depending on
//! `reqwest`/`serde_json` error types directly. HTTP-level failures keep the
//! status code and the provider's error message, which downstream
//! classification relies on.

use thiserror::Error;

/// Result type alias using GenAiError.
pub type Result<T> = std::result::Result<T, GenAiError>;

/// Errors that can occur when calling the Gemini API.
#[derive(Debug, Clone, Error)]
pub enum GenAiError {
    /// No API key was configured.
    #[error("GEMINI_API_KEY environment variable is not set")]
    MissingApiKey,

    /// The client configuration is invalid.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Network or connection-level error.
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the transport timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// The API returned a non-success HTTP status.
    ///
    /// `message` is the provider's error message when the response body
    /// carried the standard error envelope, otherwise the raw body.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error message extracted from the response.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Internal client error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GenAiError {
    /// The HTTP status code, for API-level errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            GenAiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the error came from the transport rather than the provider.
    pub fn is_transport(&self) -> bool {
        matches!(self, GenAiError::Network(_) | GenAiError::Timeout(_))
    }
}

impl From<reqwest::Error> for GenAiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenAiError::Timeout(err.to_string())
        } else if err.is_connect() {
            GenAiError::Network(format!("connection failed: {err}"))
        } else {
            GenAiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
