//! Reply generation
//!
//! Builds chat-completion prompts, runs them on a background worker and
//! recovers the three reply options from the model's output.

pub mod ai_state;
pub mod diagnostics;
pub mod message;
pub mod prompt;
pub mod provider;
pub mod reply_option;
pub mod worker;

pub use ai_state::{AiRequest, AiResponse, AiState, Dispatched};
pub use message::{ChatMessage, Role};
pub use reply_option::{ReplyOption, ReplyOptions};
