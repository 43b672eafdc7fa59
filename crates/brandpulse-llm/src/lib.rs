//! OpenAI-compatible chat-completions client.
//!
//! Implements the engine's [`brandpulse_analytics::ModelAccess`] capability
//! for enrichment: one prompt in, one completion text out, with retry and
//! backoff on transient failures. Any OpenAI-compatible endpoint works via
//! a custom base URL.

mod client;
mod error;
mod retry;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
