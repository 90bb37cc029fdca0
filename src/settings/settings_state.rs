use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::{Config, ConfigError, ConfigKey, ConfigValue};
use crate::theme;

const LIST_SEPARATOR: char = ',';
const MASK_VISIBLE_CHARS: usize = 3;

pub struct SettingsState {
    draft: Config,
    cursor: usize,
    /// Open text editor for the selected key
    editor: Option<TextArea<'static>>,
}

impl SettingsState {
    pub fn new(config: &Config) -> Self {
        Self {
            draft: config.clone(),
            cursor: 0,
            editor: None,
        }
    }

    pub fn draft(&self) -> &Config {
        &self.draft
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_key(&self) -> ConfigKey {
        ConfigKey::ALL[self.cursor]
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(ConfigKey::ALL.len() - 1);
    }

    /// Whether the draft differs from `saved`
    pub fn is_dirty(&self, saved: &Config) -> bool {
        self.draft != *saved
    }

    /// Throw away draft edits
    pub fn revert(&mut self, saved: &Config) {
        self.draft = saved.clone();
        self.editor = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor_mut(&mut self) -> Option<&mut TextArea<'static>> {
        self.editor.as_mut()
    }

    pub fn editor(&self) -> Option<&TextArea<'static>> {
        self.editor.as_ref()
    }

    /// Open the editor on the selected key; flags are toggled instead
    pub fn begin_edit(&mut self) -> bool {
        let key = self.selected_key();
        let initial = match self.draft.get(key) {
            ConfigValue::Text(text) => text,
            ConfigValue::List(items) => items.join(", "),
            ConfigValue::Flag(_) => return false,
        };

        let mut editor = TextArea::new(vec![initial]);
        editor.move_cursor(tui_textarea::CursorMove::End);
        editor.set_cursor_line_style(Style::default());
        editor.set_cursor_style(theme::palette::CURSOR);
        editor.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} (Enter to apply, Esc to discard) ", key.name()))
                .border_style(Style::default().fg(theme::settings::EDITING_BORDER)),
        );
        self.editor = Some(editor);
        true
    }

    /// Parse the editor text into the draft and close the editor
    ///
    /// On a rejected value the editor stays open.
    pub fn commit_edit(&mut self) -> Result<(), ConfigError> {
        let Some(editor) = &self.editor else {
            return Ok(());
        };
        let text = editor.lines().join(" ");
        let key = self.selected_key();

        let value = match self.draft.get(key) {
            ConfigValue::List(_) => ConfigValue::List(
                text.split(LIST_SEPARATOR)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            _ => ConfigValue::Text(text.trim().to_string()),
        };

        self.draft.set(key, value)?;
        self.editor = None;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Flip the selected flag; returns false for non-flag keys
    pub fn toggle(&mut self) -> bool {
        let key = self.selected_key();
        let ConfigValue::Flag(current) = self.draft.get(key) else {
            return false;
        };
        self.draft.set(key, ConfigValue::Flag(!current)).is_ok()
    }

    /// Step the selected key through its choices
    ///
    /// `model` cycles through `custom_models`, `clipboard_backend` through
    /// the backends. Returns false for other keys.
    pub fn cycle(&mut self, forward: bool) -> bool {
        match self.selected_key() {
            ConfigKey::Model => {
                let models = &self.draft.custom_models;
                if models.is_empty() {
                    return false;
                }
                let next = match models.iter().position(|m| *m == self.draft.model) {
                    Some(i) if forward => (i + 1) % models.len(),
                    Some(i) => (i + models.len() - 1) % models.len(),
                    None => 0,
                };
                self.draft.model = models[next].clone();
                true
            }
            ConfigKey::ClipboardBackend => {
                let backend = self.draft.clipboard_backend;
                self.draft.clipboard_backend = if forward {
                    backend.next()
                } else {
                    backend.previous()
                };
                true
            }
            _ => false,
        }
    }
}

/// Value of `key` as shown in the settings list; the API key is masked
pub fn display_value(config: &Config, key: ConfigKey) -> String {
    match config.get(key) {
        ConfigValue::Text(text) if key == ConfigKey::ApiKey => {
            if text.is_empty() {
                "(not set)".to_string()
            } else {
                let visible: String = text.chars().take(MASK_VISIBLE_CHARS).collect();
                format!("{}****", visible)
            }
        }
        ConfigValue::Text(text) => text.replace('\n', " "),
        ConfigValue::List(items) => items.join(", "),
        ConfigValue::Flag(true) => "on".to_string(),
        ConfigValue::Flag(false) => "off".to_string(),
    }
}

#[cfg(test)]
#[path = "settings_state_tests.rs"]
mod settings_state_tests;
