//! Diagnostic console page
//!
//! Sends raw `DirectChat` requests outside the conversation and mirrors the
//! traffic of the Chat page.

pub mod console_events;
pub mod console_render;
mod console_state;

pub use console_state::{ConsoleLine, ConsoleLineKind, ConsoleState, MAX_CONSOLE_LINES};
