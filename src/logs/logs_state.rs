use std::collections::VecDeque;

use chrono::Local;

/// Oldest entries are dropped past this count
pub const MAX_LOG_ENTRIES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local time, `HH:MM:SS`
    pub timestamp: String,
    pub text: String,
}

/// Operational log shown on the Logs page
#[derive(Debug, Default)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    /// Lines scrolled up from the bottom; 0 follows new entries
    scroll_from_bottom: usize,
}

impl LogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a timestamped line and forward it to the `log` facade
    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{}", text);
        self.push_entry(LogEntry {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            text,
        });
    }

    fn push_entry(&mut self, entry: LogEntry) {
        if self.entries.len() == MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        if self.scroll_from_bottom > 0 {
            self.scroll_from_bottom = (self.scroll_from_bottom + 1).min(self.entries.len());
        }
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scroll_from_bottom(&self) -> usize {
        self.scroll_from_bottom
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_from_bottom = self
            .scroll_from_bottom
            .saturating_add(lines)
            .min(self.entries.len());
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll_from_bottom = 0;
    }
}

#[cfg(test)]
#[path = "logs_state_tests.rs"]
mod logs_state_tests;
