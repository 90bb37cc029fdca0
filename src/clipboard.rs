//! Clipboard mirror
//!
//! Chosen replies are published to the clipboard so they can be pasted into
//! another chat window, and text copied elsewhere is offered back as input.
//! Supported backends:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (write only, for remote terminals)
//! - Auto mode (system with OSC 52 fallback)

mod backend;
pub mod mirror;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard, read_clipboard};
pub use mirror::{ClipboardMirror, POLL_INTERVAL};
pub use osc52::encode_osc52;
