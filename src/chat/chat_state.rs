use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::ai::reply_option::OPTION_COUNT;
use crate::theme;

/// View state of the Chat page
///
/// Conversation data lives in `Conversation`; this only holds the input
/// field, the highlighted option and the transcript scroll.
pub struct ChatState {
    pub input: TextArea<'static>,
    highlighted: usize,
    scroll_from_bottom: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_cursor_style(theme::palette::CURSOR);

        Self {
            input,
            highlighted: 0,
            scroll_from_bottom: 0,
        }
    }

    pub fn input_text(&self) -> &str {
        self.input.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn clear_input(&mut self) {
        self.input.delete_line_by_head();
        self.input.delete_line_by_end();
    }

    /// Replace the input with `text`, folded onto one line
    pub fn set_input(&mut self, text: &str) {
        self.clear_input();
        self.insert_text(text);
    }

    /// Insert `text` at the cursor, folded onto one line
    pub fn insert_text(&mut self, text: &str) {
        let folded = text
            .split(['\r', '\n'])
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.input.insert_str(folded);
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        self.highlighted = (self.highlighted + 1) % OPTION_COUNT;
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = (self.highlighted + OPTION_COUNT - 1) % OPTION_COUNT;
    }

    pub fn reset_highlight(&mut self) {
        self.highlighted = 0;
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

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }
}

#[cfg(test)]
#[path = "chat_state_tests.rs"]
mod chat_state_tests;
