use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

pub const MAX_CONSOLE_LINES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLineKind {
    /// Line typed into the console
    Prompt,
    /// Diagnostic payload of an outgoing request
    Outgoing,
    /// Options generated for the Chat page
    Options,
    /// Model reply, direct or chosen on the Chat page
    Incoming,
    System,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub kind: ConsoleLineKind,
    pub text: String,
}

pub struct ConsoleState {
    pub input: TextArea<'static>,
    lines: Vec<ConsoleLine>,
    /// Direct-chat requests whose reply has not arrived yet
    pending: Vec<u64>,
    scroll_from_bottom: usize,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleState {
    pub fn new() -> Self {
        let mut input = TextArea::default();
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Direct chat (no history) ")
                .border_style(Style::default().fg(theme::console::PROMPT)),
        );
        input.set_cursor_line_style(Style::default());
        input.set_cursor_style(theme::palette::CURSOR);

        Self {
            input,
            lines: Vec::new(),
            pending: Vec::new(),
            scroll_from_bottom: 0,
        }
    }

    pub fn input_text(&self) -> &str {
        self.input.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Take the typed line, leaving the input empty
    pub fn take_input(&mut self) -> String {
        let text = self.input_text().to_string();
        self.input.delete_line_by_head();
        self.input.delete_line_by_end();
        text
    }

    pub fn push(&mut self, kind: ConsoleLineKind, text: impl Into<String>) {
        if self.lines.len() == MAX_CONSOLE_LINES {
            self.lines.remove(0);
        }
        self.lines.push(ConsoleLine {
            kind,
            text: text.into(),
        });
        self.scroll_from_bottom = 0;
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn track(&mut self, request_id: u64) {
        self.pending.push(request_id);
    }

    /// Stop tracking `request_id`; returns whether it was a console request
    pub fn resolve(&mut self, request_id: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|id| *id != request_id);
        self.pending.len() != before
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn scroll_from_bottom(&self) -> usize {
        self.scroll_from_bottom
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_from_bottom = 0;
    }
}

#[cfg(test)]
#[path = "console_state_tests.rs"]
mod console_state_tests;
