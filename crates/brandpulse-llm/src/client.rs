//! HTTP client for OpenAI-compatible chat-completions endpoints.
//!
//! Wraps `reqwest` with typed request/response bodies, API-error
//! extraction from the JSON envelope, and retry with back-off on
//! transient failures.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use brandpulse_analytics::{GenerationConstraints, ModelAccess, ModelAccessError};

use crate::error::LlmError;
use crate::retry::retry_with_backoff;
use crate::types::{ApiErrorBody, ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF_BASE_MS: u64 = 1_000;

/// Client for an OpenAI-compatible chat-completions API.
///
/// Use [`LlmClient::new`] for the production endpoint or
/// [`LlmClient::with_base_url`] to point at a compatible server or a mock
/// in tests.
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: Url,
    model: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl LlmClient {
    /// Creates a new client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (any OpenAI-compatible
    /// endpoint, or wiremock in tests).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LlmError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandpulse/0.1 (brand-mention-analytics)")
            .build()?;

        // Normalise: the base URL must end with exactly one slash so that
        // join() appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| LlmError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            model: model.to_owned(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_base_ms: DEFAULT_BACKOFF_BASE_MS,
        })
    }

    /// Overrides the retry policy (defaults: 3 retries, 1 s base back-off).
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Requests one completion for `prompt` and returns its text.
    ///
    /// Transient failures are retried per the client's retry policy.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Api`] if the endpoint returns a non-2xx status.
    /// - [`LlmError::Http`] on network failure.
    /// - [`LlmError::Deserialize`] if the response body does not match the
    ///   chat-completions shape.
    /// - [`LlmError::EmptyCompletion`] if the reply carries no content.
    pub async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.complete_once(prompt, max_tokens, temperature)
        })
        .await
    }

    async fn complete_once(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let url = self
            .base_url
            .join("chat/completions")
            .map_err(|_| LlmError::InvalidBaseUrl(self.base_url.to_string()))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map_or_else(|_| text.clone(), |b| b.error.message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::Deserialize {
                context: "chat completion response".to_owned(),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(LlmError::EmptyCompletion)
    }
}

#[async_trait]
impl ModelAccess for LlmClient {
    async fn generate(
        &self,
        prompt: &str,
        constraints: GenerationConstraints,
    ) -> Result<String, ModelAccessError> {
        self.complete(prompt, constraints.max_tokens, constraints.temperature)
            .await
            .map_err(|e| ModelAccessError(e.to_string()))
    }
}
