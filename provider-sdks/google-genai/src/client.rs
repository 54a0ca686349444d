//! HTTP client for the Gemini generateContent API.

use std::time::Duration;

use tracing::debug;

use crate::error::{GenAiError, Result};
use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Default base URL for the Gemini API.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API credential.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Configuration for creating a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key. Required.
    pub api_key: Option<String>,
    /// Base URL override, e.g. for a test server.
    pub base_url: Option<String>,
    /// Transport-level timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a config with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the transport timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Client for the Gemini generateContent API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Create a new client from a configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_key = config.api_key.ok_or(GenAiError::MissingApiKey)?;
        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenAiError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: config
                .base_url
                .unwrap_or_else(|| GEMINI_API_BASE_URL.to_string()),
        })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenAiError::MissingApiKey)?;
        Self::new(ClientConfig::with_api_key(api_key))
    }

    /// The configured API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Build the URL for a model action, tolerating a `models/` prefix on
    /// the model name.
    fn model_url(&self, model: &str, action: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:{}", self.base_url, model, action)
    }

    /// Call generateContent on the given model.
    ///
    /// Non-success responses are parsed through the standard error envelope
    /// into [`GenAiError::Api`]; transport failures surface as
    /// [`GenAiError::Network`] or [`GenAiError::Timeout`].
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.model_url(model, "generateContent");
        debug!(model, %url, "sending generateContent request");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GenAiError::Parse(e.to_string()))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // api_key intentionally omitted
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
#[path = "client.test.rs"]
mod tests;
