//! Completion provider abstraction and the OpenAI-compatible HTTP client.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse, CompletionMessage,
};

/// Sampling temperature used for every generation.
pub const TEMPERATURE: f32 = 0.8;

/// Number of candidates requested per call.
pub const CANDIDATES: u32 = 1;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to completion provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("completion provider returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("failed to decode completion response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("completion response contained no choices")]
    NoChoices,

    #[error("completion choice had no message content")]
    MissingContent,
}

/// Something that turns a list of messages into generated text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the raw text of the first candidate.
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ProviderError>;
}

pub struct OpenAiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, messages: &[CompletionMessage]) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
            n: CANDIDATES,
        };

        let res = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            // body may not be JSON at all (proxies, gateways)
            let raw = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            return Err(ProviderError::Api { status, message });
        }

        let parsed = res
            .json::<ChatCompletionResponse>()
            .await
            .map_err(ProviderError::Decode)?;

        let choice = parsed.choices.into_iter().next().ok_or(ProviderError::NoChoices)?;
        choice.message.content.ok_or(ProviderError::MissingContent)
    }
}
