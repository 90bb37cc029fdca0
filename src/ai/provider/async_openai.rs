//! Async OpenAI-compatible chat-completions client
//!
//! Non-streaming: one POST per request, returning the first choice's text.
//! Uses reqwest for HTTP and tokio for async runtime.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{AiError, CompletionOptions, PROVIDER_NAME};
use crate::ai::message::ChatMessage;

/// Request body of the chat-completions endpoint
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Async chat-completions client
///
/// Holds a clone of the worker's shared reqwest client plus the connection
/// settings captured when the request was dispatched.
#[derive(Debug, Clone)]
pub struct AsyncOpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl AsyncOpenAiClient {
    pub fn new(client: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full URL of the chat-completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Build the request body JSON
    ///
    /// `temperature` and `max_tokens` are omitted when not set so the
    /// provider's defaults apply.
    pub fn build_request_body(
        &self,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> Result<String, AiError> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        serde_json::to_string(&body).map_err(|e| AiError::Parse {
            provider: PROVIDER_NAME.to_string(),
            message: format!("Failed to serialize request body: {}", e),
        })
    }

    /// Send one chat-completion request and return the first choice's text
    ///
    /// # Returns
    /// * `Ok(String)` - Message content (empty when the provider sent null)
    /// * `Err(AiError::Network)` - Transport failure or timeout
    /// * `Err(AiError::Api)` - Non-success HTTP status
    /// * `Err(AiError::Parse)` - Body missing `choices[0].message`
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> Result<String, AiError> {
        let body = self.build_request_body(messages, options)?;

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AiError::Network {
                provider: PROVIDER_NAME.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::Api {
                provider: PROVIDER_NAME.to_string(),
                code,
                message,
            });
        }

        let text = response.text().await.map_err(|e| AiError::Network {
            provider: PROVIDER_NAME.to_string(),
            message: e.to_string(),
        })?;

        parse_completion_text(&text)
    }
}

/// Extract `choices[0].message.content` from a response body
pub fn parse_completion_text(body: &str) -> Result<String, AiError> {
    let parsed: CompletionResponse = serde_json::from_str(body).map_err(|e| AiError::Parse {
        provider: PROVIDER_NAME.to_string(),
        message: format!("Malformed response: {}", e),
    })?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| AiError::Parse {
            provider: PROVIDER_NAME.to_string(),
            message: "Response contained no choices".to_string(),
        })
}

#[cfg(test)]
#[path = "async_openai_tests.rs"]
mod async_openai_tests;
