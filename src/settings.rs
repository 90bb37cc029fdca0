//! Settings page
//!
//! Edits a draft copy of the config; nothing is persisted until Ctrl+S.

pub mod settings_events;
pub mod settings_render;
mod settings_state;

pub use settings_state::{SettingsState, display_value};
