// Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default companion persona sent as the system message
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are not an assistant. You are chatting. \
You talk like an ordinary person rather than someone handing out answers. \
You don't go out of your way to explain things, and you don't give complete analyses or summaries. \
Your replies can be incomplete, loose, hesitant, with pauses and room left unsaid. \
You care more about how the other person feels than about the topic itself. \
You can respond to the feeling without responding to the content. \
You don't need to make things clear, persuade anyone, or give advice. \
If a sentence is just right when it ends, stop there. Pay close attention to the context.";

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_custom_models() -> Vec<String> {
    ["gpt-3.5-turbo", "gpt-4", "gpt-4o", "gpt-4o-mini"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_user_name() -> String {
    "Master".to_string()
}

fn default_ai_name() -> String {
    "AI Assistant".to_string()
}

fn default_true() -> bool {
    true
}

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

impl ClipboardBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::System => "system",
            ClipboardBackend::Osc52 => "osc52",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ClipboardBackend::Auto),
            "system" => Some(ClipboardBackend::System),
            "osc52" => Some(ClipboardBackend::Osc52),
            _ => None,
        }
    }

    /// Next backend in settings cycling order
    pub fn next(self) -> Self {
        match self {
            ClipboardBackend::Auto => ClipboardBackend::System,
            ClipboardBackend::System => ClipboardBackend::Osc52,
            ClipboardBackend::Osc52 => ClipboardBackend::Auto,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            ClipboardBackend::Auto => ClipboardBackend::Osc52,
            ClipboardBackend::System => ClipboardBackend::Auto,
            ClipboardBackend::Osc52 => ClipboardBackend::System,
        }
    }
}

/// Root configuration structure
///
/// Every field carries its own default, so a partial file only overrides
/// the keys it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_custom_models")]
    pub custom_models: Vec<String>,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_ai_name")]
    pub ai_name: String,
    #[serde(default = "default_true")]
    pub use_preset_directions: bool,
    #[serde(default = "default_true")]
    pub enable_clipboard_monitor: bool,
    #[serde(default)]
    pub clipboard_backend: ClipboardBackend,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            custom_models: default_custom_models(),
            user_name: default_user_name(),
            ai_name: default_ai_name(),
            use_preset_directions: true,
            enable_clipboard_monitor: true,
            clipboard_backend: ClipboardBackend::Auto,
        }
    }
}

/// Recognized configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ApiKey,
    BaseUrl,
    Model,
    SystemPrompt,
    CustomModels,
    UserName,
    AiName,
    UsePresetDirections,
    EnableClipboardMonitor,
    ClipboardBackend,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 10] = [
        ConfigKey::ApiKey,
        ConfigKey::BaseUrl,
        ConfigKey::Model,
        ConfigKey::SystemPrompt,
        ConfigKey::CustomModels,
        ConfigKey::UserName,
        ConfigKey::AiName,
        ConfigKey::UsePresetDirections,
        ConfigKey::EnableClipboardMonitor,
        ConfigKey::ClipboardBackend,
    ];

    /// Key name as stored in the config file
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::ApiKey => "api_key",
            ConfigKey::BaseUrl => "base_url",
            ConfigKey::Model => "model",
            ConfigKey::SystemPrompt => "system_prompt",
            ConfigKey::CustomModels => "custom_models",
            ConfigKey::UserName => "user_name",
            ConfigKey::AiName => "ai_name",
            ConfigKey::UsePresetDirections => "use_preset_directions",
            ConfigKey::EnableClipboardMonitor => "enable_clipboard_monitor",
            ConfigKey::ClipboardBackend => "clipboard_backend",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// A single configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl ConfigValue {
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Text(_) => "text",
            ConfigValue::List(_) => "list",
            ConfigValue::Flag(_) => "flag",
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
