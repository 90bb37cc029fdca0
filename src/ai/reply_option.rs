//! Reply options
//!
//! One generation cycle yields exactly three `(direction, reply)` options
//! recovered from the model's free-form output.

mod parser;

pub use parser::{
    ELLIPSIS, OPTION_COUNT, PLACEHOLDER_CONTENT, PLACEHOLDER_LABEL, RecoveryStrategy,
    TRUNCATED_LABEL_CHARS, parse_options,
};

/// A candidate reply with its direction label
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ReplyOption {
    pub label: String,
    pub content: String,
}

impl ReplyOption {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// Sentinel used to pad a short response up to three options
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_LABEL, PLACEHOLDER_CONTENT)
    }
}

/// The options of one generation cycle; always exactly three
pub type ReplyOptions = [ReplyOption; OPTION_COUNT];
