//! Output contracts for the vidbrief summarizer.
//!
//! These types describe the JSON the app expects back from generation; their
//! derived JSON Schema feeds [`crate::schema::translate`] so the provider
//! enforces the shape at generation time. Persisting the results is the
//! caller's concern.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One topic covered by the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Short topic title.
    pub title: String,
    /// One-paragraph summary of the topic.
    pub summary: String,
}

/// Full analysis of a video transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnalysis {
    /// Topics covered, in order of appearance.
    pub topics: Vec<Topic>,
    /// Overall summary. Null when the transcript was too thin to summarize.
    pub summary: Option<String>,
    /// Follow-up questions a viewer might ask.
    pub suggested_questions: Option<Vec<String>>,
}

/// Standalone suggested-questions generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedQuestions {
    /// Viewer follow-up questions.
    #[schemars(length(min = 3, max = 6))]
    pub questions: Vec<String>,
}

#[cfg(test)]
#[path = "contracts.test.rs"]
mod tests;
