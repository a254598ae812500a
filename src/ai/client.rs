//! LLM API client module
//!
//! Encapsulates the single outbound call to an OpenAI-compatible chat completion endpoint.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::SummaryError;

/// The external model collaborator: turns a prompt into a single reply string.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns a typed failure for missing credentials, non-2xx provider statuses,
    /// timeouts, transport errors, and replies without usable text.
    async fn complete(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, SummaryError>;
}

/// LLM API client for generating stories
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    model_name: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, SummaryError> {
        let http = Client::builder()
            .timeout(config.llm_timeout)
            .build()
            .map_err(|e| SummaryError::HttpError(format!("Failed to build LLM HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.llm_api_key.clone(),
            base_url: config.llm_base_url.trim_end_matches('/').to_string(),
            model_name: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, prompt: Vec<ChatCompletionMessage>) -> Result<String, SummaryError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(SummaryError::MissingCredential);
        };

        #[cfg(feature = "debug-logs")]
        info!("Using LLM prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            "Generating story with {} messages in prompt",
            prompt.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_input_from_prompt(&prompt),
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        });

        let started = std::time::Instant::now();
        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummaryError::ProviderStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            warn!("Failed to parse LLM response: {}", e);
            if e.is_timeout() {
                SummaryError::Timeout
            } else {
                SummaryError::EmptyResponse
            }
        })?;

        info!(elapsed_ms = %started.elapsed().as_millis(), "LLM reply received");

        extract_reply_text(&response_json).ok_or(SummaryError::EmptyResponse)
    }
}

/// Pulls `choices[0].message.content` out of a chat completion response.
///
/// Accepts both a plain string and an array of `{type: "text", text}` parts. Blank replies
/// count as missing.
#[must_use]
pub fn extract_reply_text(response_json: &Value) -> Option<String> {
    let content = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))?;

    let text = match content {
        Value::String(s) => s.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter(|p| p.get("type").and_then(|t| t.as_str()) == Some("text"))
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => return None,
    };

    if text.trim().is_empty() { None } else { Some(text) }
}

/// Build Chat Completions `messages` from a prompt.
/// - Text content stays a plain string
/// - Typed parts become { type: "text", text } and { type: "`image_url`", `image_url`: { url } }
pub fn build_chat_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };

            let content = match &m.content {
                Content::Text(t) => Value::String(t.clone()),
                Content::ImageUrl(parts) => Value::Array(
                    parts
                        .iter()
                        .filter_map(|part| {
                            if let Some(iu) = &part.image_url {
                                Some(json!({ "type": "image_url", "image_url": { "url": iu.url } }))
                            } else {
                                part.text
                                    .as_ref()
                                    .map(|t| json!({ "type": "text", "text": t }))
                            }
                        })
                        .collect(),
                ),
            };

            json!({
                "role": role_str,
                "content": content
            })
        })
        .collect()
}
