//! AI provider abstraction
//!
//! Defines the AiError types, the per-request completion options, and the
//! factory that turns the current config into a chat-completion client.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::Config;

mod async_openai;

pub use async_openai::{AsyncOpenAiClient, CompletionRequest};

/// Provider name used in error messages
pub const PROVIDER_NAME: &str = "OpenAI-compatible";

/// Upper bound for a single chat-completion round trip
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    /// AI is not configured (missing API key, model or endpoint)
    #[error("[{provider}] AI not configured: {message}")]
    NotConfigured { provider: String, message: String },

    /// Network error during API request
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// API returned an error response
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse API response
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },
}

impl AiError {
    pub(crate) fn not_configured(message: &str) -> Self {
        AiError::NotConfigured {
            provider: PROVIDER_NAME.to_string(),
            message: message.to_string(),
        }
    }
}

/// Optional sampling parameters attached to one request
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompletionOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Connection settings snapshot taken from the config at dispatch time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ProviderSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    /// Check the settings before any request is dispatched
    pub fn validate(&self) -> Result<(), AiError> {
        if self.api_key.trim().is_empty() {
            return Err(AiError::not_configured(
                "Missing API key. Set 'api_key' on the Settings page (F2) before chatting.",
            ));
        }
        if self.model.trim().is_empty() {
            return Err(AiError::not_configured(
                "Missing model. Pick a model on the Settings page (F2).",
            ));
        }
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AiError::not_configured(
                "Invalid base_url. It must start with http:// or https://.",
            ));
        }
        Ok(())
    }
}

/// Build a shared HTTP client for the worker
pub fn build_http_client() -> Result<Client, AiError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AiError::Network {
            provider: PROVIDER_NAME.to_string(),
            message: format!("Failed to build HTTP client: {}", e),
        })
}

/// Create a chat-completion client for `settings`, reusing `http`
///
/// Returns an error if the settings are incomplete (e.g., missing API key)
pub fn client_for(
    http: &Client,
    settings: &ProviderSettings,
) -> Result<AsyncOpenAiClient, AiError> {
    settings.validate()?;
    Ok(AsyncOpenAiClient::new(
        http.clone(),
        settings.api_key.trim().to_string(),
        settings.base_url.trim().to_string(),
        settings.model.trim().to_string(),
    ))
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
