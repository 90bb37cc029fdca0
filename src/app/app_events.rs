use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use super::app_state::{App, Page};
use crate::chat::chat_events;
use crate::console::console_events;
use crate::logs::logs_events;
use crate::settings::settings_events;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// One tick of the UI loop: drain background results, then wait briefly
    /// for terminal input
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_ai_responses();
        self.poll_clipboard(Instant::now());

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub(crate) fn handle_paste_event(&mut self, text: String) {
        match self.page {
            Page::Chat if self.conversation.is_idle() => self.chat.insert_text(&text),
            Page::Console => {
                let folded = text.replace(['\r', '\n'], " ");
                self.console.input.insert_str(folded);
            }
            Page::Settings => {
                if let Some(editor) = self.settings.editor_mut() {
                    editor.insert_str(text.replace(['\r', '\n'], " "));
                }
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        match self.page {
            Page::Chat => chat_events::handle_chat_key(self, key),
            Page::Settings => settings_events::handle_settings_key(self, key),
            Page::Logs => logs_events::handle_logs_key(self, key),
            Page::Console => console_events::handle_console_key(self, key),
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
