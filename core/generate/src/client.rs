//! High-level generation client with model cascade support.
//!
//! [`GenerateClient`] wraps the Gemini SDK client and drives the attempt
//! loop: candidate models are tried strictly in sequence until one yields
//! non-empty text, retryable failures advance the cascade, and fatal
//! failures abort it immediately. One structured telemetry record is emitted
//! per attempt.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use google_genai_sdk::{
    Client, GenAiError, GenerateContentRequest, GenerationConfig, UsageMetadata,
};

use crate::cascade::effective_cascade;
use crate::error::{FailureKind, GenerateError, Result, classify};
use crate::schema::translate;

/// Per-request options.
///
/// Constructed fresh per call; nothing here outlives the request.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// JSON Schema contract for the expected output shape. Translated once
    /// and reused across all attempts.
    pub output_contract: Option<serde_json::Value>,
    /// Model to try first. Ignored with a warning when not a cascade member.
    pub preferred_model: Option<String>,
    /// Upper bound on a single attempt. Overrides the client-level default.
    pub per_attempt_timeout: Option<Duration>,
}

impl GenerateOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output contract.
    pub fn with_output_contract(mut self, contract: serde_json::Value) -> Self {
        self.output_contract = Some(contract);
        self
    }

    /// Set the preferred model.
    pub fn with_preferred_model(mut self, model: impl Into<String>) -> Self {
        self.preferred_model = Some(model.into());
        self
    }

    /// Set the per-attempt timeout.
    pub fn with_per_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.per_attempt_timeout = Some(timeout);
        self
    }
}

/// Client-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Default per-attempt timeout applied when a request does not set one.
    #[serde(default, with = "humantime_serde")]
    pub attempt_timeout: Option<Duration>,
}

impl GenerateConfig {
    /// Set the default per-attempt timeout.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = Some(timeout);
        self
    }
}

/// Outcome of a single model attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The model produced non-empty text.
    Success,
    /// The model answered with empty or blank text.
    Empty,
    /// The attempt failed with the given classification.
    Failed(FailureKind),
}

/// Telemetry record for a single model attempt.
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    /// Model identifier attempted.
    pub model: String,
    /// Wall-clock time spent waiting on this attempt.
    pub latency: Duration,
    /// Character count of the prompt.
    pub prompt_chars: usize,
    /// Character count of the response text (0 on failure).
    pub response_chars: usize,
    /// Token usage, when the provider returned it.
    pub usage: Option<UsageMetadata>,
    /// How the attempt ended.
    pub outcome: AttemptOutcome,
}

/// A successful generation with its attempt history.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The generated text. Never empty.
    pub text: String,
    /// The model that produced it.
    pub model: String,
    /// Every attempt made for this request, in cascade order.
    pub attempts: Vec<AttemptRecord>,
}

/// Generation client driving the model cascade.
///
/// Attempts are strictly sequential; independent requests share nothing but
/// the read-only cascade list and the credential inside the SDK client.
#[derive(Clone)]
pub struct GenerateClient {
    sdk: Client,
    config: GenerateConfig,
}

impl GenerateClient {
    /// Create a client over an existing SDK client.
    pub fn new(sdk: Client) -> Self {
        Self {
            sdk,
            config: GenerateConfig::default(),
        }
    }

    /// Create a client with custom configuration.
    pub fn with_config(sdk: Client, config: GenerateConfig) -> Self {
        Self { sdk, config }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let sdk = Client::from_env().map_err(|e| GenerateError::Configuration(e.to_string()))?;
        Ok(Self::new(sdk))
    }

    /// The current configuration.
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Generate text for `prompt`, trying cascade models in order until one
    /// yields non-empty text.
    pub async fn generate(&self, prompt: &str, options: GenerateOptions) -> Result<String> {
        self.generate_detailed(prompt, options)
            .await
            .map(|generation| generation.text)
    }

    /// Like [`generate`](Self::generate), but returns the winning model and
    /// the per-attempt records alongside the text.
    pub async fn generate_detailed(
        &self,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<Generation> {
        // Pre-flight: credential, then contract translation. Both abort
        // before any network attempt.
        if self.sdk.api_key().trim().is_empty() {
            return Err(GenerateError::Configuration(
                "GEMINI_API_KEY is empty".to_string(),
            ));
        }

        let response_schema = match &options.output_contract {
            Some(contract) => Some(translate(contract)?),
            None => None,
        };

        let mut request = GenerateContentRequest::from_prompt(prompt);
        if let Some(schema) = response_schema {
            request = request.with_generation_config(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
                ..Default::default()
            });
        }

        let timeout = options.per_attempt_timeout.or(self.config.attempt_timeout);
        let models = effective_cascade(options.preferred_model.as_deref());
        let prompt_chars = prompt.len();

        let mut attempts: Vec<AttemptRecord> = Vec::with_capacity(models.len());
        let mut last_failure = FailureKind::Unknown;

        for model in models {
            debug!(model, prompt_chars, "attempting generation");
            let started = Instant::now();
            let result = self.attempt(model, &request, timeout).await;
            let latency = started.elapsed();

            match result {
                Ok(response) => {
                    let text = response.text().unwrap_or_default();
                    let usage = response.usage_metadata;

                    if text.trim().is_empty() {
                        warn!(model, "model returned empty response, trying next");
                        attempts.push(AttemptRecord {
                            model: model.to_string(),
                            latency,
                            prompt_chars,
                            response_chars: 0,
                            usage,
                            outcome: AttemptOutcome::Empty,
                        });
                        last_failure = FailureKind::Empty;
                        continue;
                    }

                    info!(
                        model,
                        latency_ms = latency.as_millis() as i64,
                        prompt_chars,
                        response_chars = text.len(),
                        prompt_tokens = usage.as_ref().and_then(|u| u.prompt_token_count),
                        response_tokens = usage.as_ref().and_then(|u| u.candidates_token_count),
                        total_tokens = usage.as_ref().and_then(|u| u.total_token_count),
                        "generation succeeded"
                    );
                    attempts.push(AttemptRecord {
                        model: model.to_string(),
                        latency,
                        prompt_chars,
                        response_chars: text.len(),
                        usage,
                        outcome: AttemptOutcome::Success,
                    });
                    return Ok(Generation {
                        text,
                        model: model.to_string(),
                        attempts,
                    });
                }
                Err(sdk_error) => {
                    let kind = classify(&sdk_error);
                    attempts.push(AttemptRecord {
                        model: model.to_string(),
                        latency,
                        prompt_chars,
                        response_chars: 0,
                        usage: None,
                        outcome: AttemptOutcome::Failed(kind),
                    });
                    last_failure = kind;

                    if kind.is_retryable() {
                        warn!(
                            model,
                            failure = %kind,
                            error = %sdk_error,
                            "retryable failure, trying next model"
                        );
                        continue;
                    }

                    error!(
                        model,
                        failure = %kind,
                        error = %sdk_error,
                        "fatal failure, aborting cascade"
                    );
                    return Err(GenerateError::fatal(kind, &sdk_error));
                }
            }
        }

        let attempted: Vec<String> = attempts.iter().map(|a| a.model.clone()).collect();
        error!(
            attempted = attempted.join(", "),
            last = %last_failure,
            "all cascade models exhausted"
        );
        Err(GenerateError::ExhaustedCascade {
            attempted,
            last: last_failure,
        })
    }

    /// One generation call, raced against the per-attempt timer when set.
    ///
    /// The call runs as a spawned task so that when the timer wins, the
    /// in-flight request is not cancelled: it keeps running in the
    /// background and its eventual result is discarded.
    async fn attempt(
        &self,
        model: &str,
        request: &GenerateContentRequest,
        timeout: Option<Duration>,
    ) -> std::result::Result<google_genai_sdk::GenerateContentResponse, GenAiError> {
        let Some(limit) = timeout else {
            return self.sdk.generate_content(model, request).await;
        };

        let sdk = self.sdk.clone();
        let model = model.to_string();
        let request = request.clone();
        let call = tokio::spawn(async move { sdk.generate_content(&model, &request).await });

        match tokio::time::timeout(limit, call).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(GenAiError::Internal(format!(
                "generation task failed: {join_error}"
            ))),
            // Dropping the JoinHandle detaches the task; the request is
            // abandoned, not aborted.
            Err(_elapsed) => Err(GenAiError::Timeout(format!(
                "attempt did not settle within {limit:?}"
            ))),
        }
    }
}

impl std::fmt::Debug for GenerateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateClient")
            .field("sdk", &self.sdk)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
#[path = "client.test.rs"]
mod tests;
