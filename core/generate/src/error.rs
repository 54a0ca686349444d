//! Error taxonomy and failure classification for the generation client.
//!
//! Detection is decoupled from control flow: [`classify`] pattern-matches a
//! provider error into a [`FailureKind`] (status code first, message
//! substring second), and the cascade loop consults only
//! [`FailureKind::is_retryable`] to decide between advancing to the next
//! model and aborting. [`GenerateError`] is what callers ultimately see.

use thiserror::Error;

use google_genai_sdk::GenAiError;

use crate::schema::SchemaError;

/// Result type alias using GenerateError.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Classification of a single failed attempt.
///
/// Rate-limit and overload signals are per-model: a different, possibly
/// less-loaded model may succeed, so the cascade advances. Connectivity and
/// credential failures are cascade-wide: retrying another model cannot fix a
/// broken network path or an invalid key, so the cascade aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Upstream reported overload (HTTP 503 or an overload message).
    Overloaded,
    /// Upstream rate limiting (HTTP 429 or a rate-limit message).
    RateLimited,
    /// Credential rejected (HTTP 401 or an API-key message).
    Authentication,
    /// Malformed request (HTTP 400).
    InvalidRequest,
    /// Connectivity failure (DNS, connection refused/reset).
    Network,
    /// The per-attempt timer fired before the call settled.
    Timeout,
    /// The model answered with empty or blank text.
    Empty,
    /// Anything that matched no known signal.
    Unknown,
}

impl FailureKind {
    /// True when the cascade should advance to the next model.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FailureKind::Overloaded
                | FailureKind::RateLimited
                | FailureKind::Timeout
                | FailureKind::Empty
        )
    }

    /// Short human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Overloaded => "overloaded",
            FailureKind::RateLimited => "rate limited",
            FailureKind::Authentication => "authentication failed",
            FailureKind::InvalidRequest => "invalid request",
            FailureKind::Network => "network error",
            FailureKind::Timeout => "timeout",
            FailureKind::Empty => "empty response",
            FailureKind::Unknown => "unknown error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a provider error into a [`FailureKind`].
///
/// HTTP status codes take precedence; message substrings cover upstreams
/// that bury the signal in the error text.
pub fn classify(error: &GenAiError) -> FailureKind {
    match error {
        GenAiError::Api { status, message } => {
            let message = message.to_ascii_lowercase();
            if *status == 503 || message.contains("overload") {
                FailureKind::Overloaded
            } else if *status == 429 || message.contains("rate limit") {
                FailureKind::RateLimited
            } else if *status == 401
                || message.contains("unauthorized")
                || message.contains("api key")
            {
                FailureKind::Authentication
            } else if *status == 400 {
                FailureKind::InvalidRequest
            } else {
                FailureKind::Unknown
            }
        }
        GenAiError::MissingApiKey => FailureKind::Authentication,
        GenAiError::Network(_) => FailureKind::Network,
        GenAiError::Timeout(_) => FailureKind::Timeout,
        GenAiError::InvalidConfig(_) | GenAiError::Parse(_) | GenAiError::Internal(_) => {
            FailureKind::Unknown
        }
    }
}

/// Terminal errors of the generation client.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The API credential is missing or empty. Raised pre-flight, before
    /// any network attempt.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The output contract could not be translated. Raised pre-flight.
    #[error("schema conversion failed: {0}")]
    SchemaConversion(#[from] SchemaError),

    /// Connectivity failure; aborts the whole cascade.
    #[error("network error: {0}")]
    Network(String),

    /// Credential rejected; aborts the whole cascade.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider rejected the request as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider error that matched no known signal.
    #[error("provider error: {0}")]
    Provider(String),

    /// Every model in the cascade was tried without producing text.
    #[error("all models failed after trying {}: last failure: {last}", .attempted.join(", "))]
    ExhaustedCascade {
        /// Model identifiers attempted, in cascade order.
        attempted: Vec<String>,
        /// Classification of the last failure encountered.
        last: FailureKind,
    },
}

impl GenerateError {
    /// Build the fatal error for a classified attempt failure.
    pub(crate) fn fatal(kind: FailureKind, error: &GenAiError) -> Self {
        let message = error.to_string();
        match kind {
            FailureKind::Network => GenerateError::Network(message),
            FailureKind::Authentication => GenerateError::Authentication(message),
            FailureKind::InvalidRequest => GenerateError::InvalidRequest(message),
            _ => GenerateError::Provider(message),
        }
    }
}

#[cfg(test)]
#[path = "error.test.rs"]
mod tests;
