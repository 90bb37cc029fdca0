//! Two-way clipboard mirror
//!
//! `publish` writes a chosen reply out and remembers it, so the next poll
//! does not feed our own reply back in as user input.

use std::time::{Duration, Instant};

use crate::config::ClipboardBackend;

use super::backend::{ClipboardResult, copy_to_clipboard, read_clipboard};

/// How often the UI loop samples the system clipboard
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct ClipboardMirror {
    enabled: bool,
    backend: ClipboardBackend,
    last_published: Option<String>,
    /// Last text observed by `observe`; `None` until the first sample
    last_seen: Option<String>,
    last_poll: Option<Instant>,
}

impl ClipboardMirror {
    pub fn new(enabled: bool, backend: ClipboardBackend) -> Self {
        Self {
            enabled,
            backend,
            last_published: None,
            last_seen: None,
            last_poll: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn backend(&self) -> ClipboardBackend {
        self.backend
    }

    pub fn last_published(&self) -> Option<&str> {
        self.last_published.as_deref()
    }

    /// Toggle monitoring; re-enabling takes a fresh baseline sample
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.last_seen = None;
        }
        self.enabled = enabled;
    }

    pub fn set_backend(&mut self, backend: ClipboardBackend) {
        self.backend = backend;
    }

    /// Write `text` to the clipboard and remember it as our own output
    ///
    /// Empty text is ignored.
    pub fn publish(&mut self, text: &str) -> ClipboardResult {
        if text.is_empty() {
            return Ok(());
        }

        self.last_published = Some(text.to_string());
        self.last_seen = Some(text.to_string());
        copy_to_clipboard(text, self.backend)
    }

    /// Filter an externally authored clipboard text
    ///
    /// Returns `None` when monitoring is off, the text is empty, or it is
    /// exactly the last published reply.
    pub fn on_change(&self, text: &str) -> Option<String> {
        if !self.enabled || text.is_empty() {
            return None;
        }
        if self.last_published.as_deref() == Some(text) {
            return None;
        }
        Some(text.to_string())
    }

    /// Feed one clipboard sample; yields text only when it changed
    ///
    /// The first sample after start (or after re-enabling) is a baseline and
    /// never yields.
    pub fn observe(&mut self, current: Option<String>) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let current = current?;

        let Some(previous) = self.last_seen.replace(current.clone()) else {
            return None;
        };
        if previous == current {
            return None;
        }

        self.on_change(&current)
    }

    /// Sample the clipboard if `POLL_INTERVAL` has elapsed since the last poll
    pub fn poll_if_due(&mut self, now: Instant) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let due = self
            .last_poll
            .is_none_or(|last| now.duration_since(last) >= POLL_INTERVAL);
        if !due {
            return None;
        }
        self.last_poll = Some(now);

        match read_clipboard(self.backend) {
            Ok(current) => self.observe(current),
            Err(e) => {
                log::debug!("Clipboard poll failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "mirror_tests.rs"]
mod mirror_tests;
