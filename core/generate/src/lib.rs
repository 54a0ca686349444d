//! vidbrief-generate - Model-cascade generation client for the vidbrief
//! video summarizer.
//!
//! This crate wraps the Gemini SDK to provide:
//! - An ordered model cascade (cheapest first) with a per-request preferred
//!   model
//! - Per-attempt timeout racing that abandons, but never cancels, the
//!   in-flight call
//! - Uniform failure classification deciding retry-vs-abort
//! - Translation of JSON Schema output contracts into the provider's
//!   constrained-output format
//!
//! Rate-limit and overload failures advance to the next model; connectivity
//! and credential failures abort the whole cascade, since trying a different
//! model cannot fix either. Preserve that asymmetry when changing the loop:
//! a flat retry-N-times policy changes observable failure behavior.
//!
//! # Quick Start
//!
//! ```ignore
//! use vidbrief_generate::{GenerateClient, GenerateOptions, contracts::VideoAnalysis};
//! use vidbrief_generate::schema::contract_for;
//!
//! let client = GenerateClient::from_env()?;
//! let options = GenerateOptions::new()
//!     .with_output_contract(contract_for::<VideoAnalysis>());
//!
//! let text = client.generate("Summarize this transcript: ...", options).await?;
//! let analysis: VideoAnalysis = serde_json::from_str(&text)?;
//! ```
//!
//! # Module Structure
//!
//! - [`cascade`] - Model cascade ordering
//! - [`client`] - The attempt loop
//! - [`contracts`] - Output shapes used by the summarizer app
//! - [`error`] - Error taxonomy and failure classification
//! - [`schema`] - Contract-to-provider schema translation

pub mod cascade;
pub mod client;
pub mod contracts;
pub mod error;
pub mod schema;

pub use cascade::{MODEL_CASCADE, effective_cascade, is_cascade_model};
pub use client::{
    AttemptOutcome, AttemptRecord, GenerateClient, GenerateConfig, GenerateOptions, Generation,
};
pub use error::{FailureKind, GenerateError, Result, classify};
pub use schema::{SchemaError, contract_for, translate};

// Re-export the SDK types callers need to construct a client.
pub use google_genai_sdk::{Client, ClientConfig};
