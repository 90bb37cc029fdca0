//! chatpick library - companion chat with three reply directions per turn
//!
//! This library exposes the core functionality of chatpick for testing purposes.

pub mod ai;
pub mod app;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod console;
pub mod conversation;
pub mod error;
pub mod lexicon;
pub mod logs;
pub mod notification;
pub mod settings;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Page};
pub use config::Config;
