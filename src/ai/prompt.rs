//! Prompt construction
//!
//! Assembles the chat-completion message list for each request mode.
//! The persona and lexicon are advisory context only; the model may ignore
//! them, which is why option parsing is lenient.

use serde::Serialize;

use super::message::ChatMessage;
use super::provider::CompletionOptions;
use crate::config::Config;

/// Marker line opening the lexicon block in the system message
pub const PRESET_MARK: &str = "### Core directive: preset direction lexicon ###";
/// Marker line closing the lexicon block
pub const PRESET_END_MARK: &str = "################################";
/// Non-semantic user message used to warm the connection
pub const PRELOAD_PING: &str = "Ping (System Check)";
/// Sampling temperature for option generation
pub const GENERATE_TEMPERATURE: f32 = 0.8;
/// Token cap for the warm-up request
pub const PRELOAD_MAX_TOKENS: u32 = 1;

/// Request mode, carrying the inputs that mode needs
#[derive(Debug, Clone, Copy)]
pub enum PromptMode<'a> {
    /// Warm-up request; the reply is discarded
    Preload,
    /// Diagnostic console: raw input, no history
    DirectChat { input: &'a str },
    /// Three reply directions with content, full history attached
    GenerateOptions {
        input: &'a str,
        history: &'a [ChatMessage],
    },
}

/// Tag identifying the request kind in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RequestType {
    #[serde(rename = "PRELOAD_PING")]
    PreloadPing,
    #[serde(rename = "DIRECT_CHAT")]
    DirectChat,
    #[serde(rename = "GENERATE_OPTIONS_WITH_CONTENT")]
    GenerateOptions,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::PreloadPing => "PRELOAD_PING",
            RequestType::DirectChat => "DIRECT_CHAT",
            RequestType::GenerateOptions => "GENERATE_OPTIONS_WITH_CONTENT",
        }
    }

    /// Sampling parameters sent with this kind of request
    pub fn completion_options(self) -> CompletionOptions {
        match self {
            RequestType::PreloadPing => CompletionOptions {
                temperature: None,
                max_tokens: Some(PRELOAD_MAX_TOKENS),
            },
            RequestType::DirectChat => CompletionOptions::default(),
            RequestType::GenerateOptions => CompletionOptions {
                temperature: Some(GENERATE_TEMPERATURE),
                max_tokens: None,
            },
        }
    }

    /// Whether the diagnostic payload should carry the system message
    pub fn exports_system_message(self) -> bool {
        matches!(self, RequestType::PreloadPing)
    }
}

/// Config values the prompt builder reads
#[derive(Debug, Clone, Copy)]
pub struct PromptSettings<'a> {
    pub system_prompt: &'a str,
    pub use_preset_directions: bool,
}

impl<'a> From<&'a Config> for PromptSettings<'a> {
    fn from(config: &'a Config) -> Self {
        Self {
            system_prompt: &config.system_prompt,
            use_preset_directions: config.use_preset_directions,
        }
    }
}

/// Ordered message list plus its request tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPlan {
    pub messages: Vec<ChatMessage>,
    pub request_type: RequestType,
}

/// Build the messages for `mode`
///
/// Always starts with the system message; `lexicon` is the joined direction
/// list and is only embedded when the lexicon feature is on.
pub fn build_messages(
    mode: PromptMode<'_>,
    settings: PromptSettings<'_>,
    lexicon: &str,
) -> PromptPlan {
    let mut messages = vec![build_system_message(settings, lexicon)];

    let request_type = match mode {
        PromptMode::Preload => {
            messages.push(ChatMessage::user(PRELOAD_PING));
            RequestType::PreloadPing
        }
        PromptMode::DirectChat { input } => {
            messages.push(ChatMessage::user(input));
            RequestType::DirectChat
        }
        PromptMode::GenerateOptions { input, history } => {
            messages.extend(history.iter().cloned());
            messages.push(ChatMessage::user(build_generate_options_prompt(
                input,
                settings.use_preset_directions,
            )));
            RequestType::GenerateOptions
        }
    };

    PromptPlan {
        messages,
        request_type,
    }
}

/// Persona text, plus the delimited lexicon block when enabled and non-empty
pub fn build_system_message(settings: PromptSettings<'_>, lexicon: &str) -> ChatMessage {
    if settings.use_preset_directions && !lexicon.trim().is_empty() {
        ChatMessage::system(format!(
            "{}\n\n{}\nReference preset direction lexicon: {}\n{}",
            settings.system_prompt, PRESET_MARK, lexicon, PRESET_END_MARK
        ))
    } else {
        ChatMessage::system(settings.system_prompt)
    }
}

/// User message asking for three `[direction] reply` lines
pub fn build_generate_options_prompt(user_input: &str, use_preset_directions: bool) -> String {
    let mut prompt = format!("User input: '{}'.\n", user_input);

    if use_preset_directions {
        prompt.push_str(
            "Choose 3 suitable directions from the [preset direction lexicon] \
             and write the matching reply content for each.\n",
        );
    } else {
        prompt.push_str(
            "Devise 3 distinct reply directions and write the matching reply content for each. \
             Also summarize each reply as its [direction], not too terse, reading like a \
             visual-novel choice of 5 to 7 characters.\n",
        );
    }

    prompt.push_str("Strict format requirements:\n");
    prompt.push_str("1. Output exactly 3 lines, one option per line.\n");
    prompt.push_str("2. Every line must follow the format: [direction] reply text\n");
    prompt.push_str("3. Do not output any numbering or extra commentary.");

    prompt
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
