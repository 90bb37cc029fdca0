//! Conversation flow
//!
//! The turn-taking state machine behind the Chat page: submit, receive the
//! three options, then select, cancel or regenerate.

mod state;

pub use state::{Conversation, Phase, Speaker, TranscriptEntry};
