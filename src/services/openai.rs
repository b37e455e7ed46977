use crate::models::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the OpenAI API
#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// The single capability the AI-backed endpoints depend on: generate text
/// given role-tagged messages, a model selector and a randomness parameter.
///
/// Handlers hold this as a trait object so tests can substitute a
/// deterministic stub for the real client.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        temperature: f32,
        messages: &[ChatMessage],
    ) -> Result<String, OpenAiError>;
}

/// OpenAI chat-completion client
///
/// A thin pass-through: one outbound call per invocation, no caching and no
/// retry. Transport timeout is the only timeout applied.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(
        &self,
        model: &str,
        temperature: f32,
        messages: &[ChatMessage],
    ) -> Result<String, OpenAiError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = ChatCompletionRequest {
            model,
            messages,
            temperature,
        };

        tracing::debug!("Requesting completion from {} (model: {})", url, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Completion request failed: {} - {}", status, body);
            return Err(OpenAiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response.json().await?;

        let completion: ChatCompletionResponse = serde_json::from_value(json)
            .map_err(|e| OpenAiError::InvalidResponse(format!("Failed to parse completion: {}", e)))?;

        // A response with no choices or null content is a valid, empty
        // generation, not an error.
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}
