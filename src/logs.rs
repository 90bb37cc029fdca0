pub mod logs_events;
pub mod logs_render;
mod logs_state;

pub use logs_state::{LogEntry, LogState, MAX_LOG_ENTRIES};
