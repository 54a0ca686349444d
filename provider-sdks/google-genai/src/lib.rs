//! google-genai-sdk - Rust client for the Google Generative AI (Gemini) API.
//!
//! A minimal, non-streaming client for the generateContent endpoint:
//! camelCase wire types, a reqwest-backed [`Client`], and a typed error
//! surface that preserves HTTP status codes and provider error messages for
//! callers that classify failures.
//!
//! # Quick Start
//!
//! ```ignore
//! use google_genai_sdk::{Client, GenerateContentRequest};
//!
//! let client = Client::from_env()?;
//! let request = GenerateContentRequest::from_prompt("Summarize this video transcript: ...");
//! let response = client.generate_content("gemini-2.5-flash", &request).await?;
//! println!("{}", response.text().unwrap_or_default());
//! ```
//!
//! # Module Structure
//!
//! - [`client`] - HTTP client and configuration
//! - [`error`] - Error types
//! - [`types`] - Wire types for requests, responses, and schemas

pub mod client;
pub mod error;
pub mod types;

pub use client::{API_KEY_ENV_VAR, Client, ClientConfig, GEMINI_API_BASE_URL};
pub use error::{GenAiError, Result};
pub use types::{
    ApiErrorBody, ApiErrorResponse, Candidate, Content, FinishReason, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part, Schema, SchemaType, UsageMetadata,
};
