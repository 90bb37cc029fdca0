use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("failed to write clipboard")]
    WriteError,
    #[error("failed to read clipboard")]
    ReadError,
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}

/// Current clipboard text, `None` when the backend cannot be read
///
/// OSC 52 is write only, so monitoring is unavailable with that backend.
pub fn read_clipboard(backend: ClipboardBackend) -> Result<Option<String>, ClipboardError> {
    match backend {
        ClipboardBackend::Osc52 => Ok(None),
        ClipboardBackend::System | ClipboardBackend::Auto => system::read(),
    }
}
