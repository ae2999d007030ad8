//! Groq LLM provider implementation.
//!
//! Groq exposes an OpenAI-compatible chat completions API, so the same client
//! also serves the "openai" provider with a different base URL.
//! API: https://console.groq.com/docs/api-reference#chat

use crate::client::{ChatClient, ChatRequest, ChatResponse, LlmUsage};
use crate::error::{LlmError, LlmErrorKind};
use crate::types::{ChatMessage, ProviderType};
use infohub_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat completions request format.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Chat completions response format.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// Groq (OpenAI-compatible) chat client.
pub struct GroqClient {
    /// Provider label used in logs and errors
    provider: ProviderType,

    /// Base URL for the API (without `/chat/completions`)
    base_url: String,

    /// Bearer credential
    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl GroqClient {
    /// Create a Groq client with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_options(
            ProviderType::Groq,
            ProviderType::Groq.default_endpoint(),
            api_key,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a client for any OpenAI-compatible endpoint.
    pub fn with_options(
        provider: ProviderType,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Llm(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            provider,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Convert a chat completions response to ChatResponse.
    fn convert_response(&self, response: CompletionResponse) -> Result<ChatResponse, LlmError> {
        let usage = response
            .usage
            .map(|u| LlmUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| {
                LlmError::new(
                    LlmErrorKind::Other,
                    format!("{} response contained no choices", self.provider.as_str()),
                )
            })?;

        Ok(ChatResponse {
            content,
            model: response.model,
            usage,
        })
    }
}

#[async_trait::async_trait]
impl ChatClient for GroqClient {
    fn provider_name(&self) -> &str {
        self.provider.as_str()
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        tracing::info!(
            provider = self.provider.as_str(),
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let body = CompletionRequest {
            model: &request.model,
            messages: &request.messages,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let detail = if e.is_timeout() {
                    "request timed out".to_string()
                } else {
                    e.to_string()
                };
                match e.status() {
                    Some(status) => LlmError::from_status(
                        status.as_u16(),
                        format!("Failed to send request: {}", detail),
                    ),
                    None => LlmError::unclassified(format!("Failed to send request: {}", detail)),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), "Chat completion rejected");
            return Err(LlmError::from_status(
                status.as_u16(),
                format!(
                    "{} API error ({}): {}",
                    self.provider.as_str(),
                    status,
                    error_text
                ),
            ));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            LlmError::new(
                LlmErrorKind::Other,
                format!("Failed to parse {} response: {}", self.provider.as_str(), e),
            )
        })?;

        let chat_response = self.convert_response(completion)?;

        tracing::info!(
            total_tokens = chat_response.usage.total_tokens,
            "Received chat completion"
        );
        tracing::debug!("Response: {:?}", chat_response);

        Ok(chat_response)
    }
}
