use std::time::Instant;

use crate::ai::prompt::{PromptMode, PromptSettings, build_messages};
use crate::ai::provider::ProviderSettings;
use crate::ai::{AiResponse, AiState, ReplyOptions};
use crate::chat::ChatState;
use crate::clipboard::ClipboardMirror;
use crate::config::ConfigStore;
use crate::console::{ConsoleLineKind, ConsoleState};
use crate::conversation::Conversation;
use crate::lexicon::Lexicon;
use crate::logs::LogState;
use crate::notification::NotificationState;
use crate::settings::SettingsState;

/// Top-level pages, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Chat,
    Settings,
    Logs,
    Console,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Chat, Page::Settings, Page::Logs, Page::Console];

    pub fn title(self) -> &'static str {
        match self {
            Page::Chat => "Chat",
            Page::Settings => "Settings",
            Page::Logs => "Logs",
            Page::Console => "Console",
        }
    }

    /// Function key number (F1..F4) that opens the page
    pub fn function_key(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_function_key(n: u8) -> Option<Self> {
        Self::ALL.get((n as usize).checked_sub(1)?).copied()
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    pub page: Page,
    pub config: ConfigStore,
    pub lexicon: Lexicon,
    pub ai: AiState,
    pub conversation: Conversation,
    pub chat: ChatState,
    pub settings: SettingsState,
    pub logs: LogState,
    pub console: ConsoleState,
    pub clipboard: ClipboardMirror,
    pub notification: NotificationState,
    pub should_quit: bool,
    /// Warm-up request still in flight
    preload_request: Option<u64>,
}

impl App {
    /// App without a request worker; call `connect_worker` before running
    pub fn new(config: ConfigStore, lexicon: Lexicon) -> Self {
        let settings = SettingsState::new(config.config());
        let clipboard = ClipboardMirror::new(
            config.config().enable_clipboard_monitor,
            config.config().clipboard_backend,
        );

        Self {
            page: Page::default(),
            config,
            lexicon,
            ai: AiState::disconnected(),
            conversation: Conversation::new(),
            chat: ChatState::new(),
            settings,
            logs: LogState::new(),
            console: ConsoleState::new(),
            clipboard,
            notification: NotificationState::new(),
            should_quit: false,
            preload_request: None,
        }
    }

    pub fn connect_worker(&mut self, ai: AiState) {
        self.ai = ai;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn preload_request(&self) -> Option<u64> {
        self.preload_request
    }

    /// Move the conversation's pending log lines to the Logs page
    pub fn flush_conversation_log(&mut self) {
        for line in self.conversation.drain_log() {
            self.logs.push(line);
        }
    }

    /// Dispatch the warm-up request; its reply is only logged
    pub fn run_preload(&mut self) {
        let config = self.config.config();
        let plan = build_messages(
            PromptMode::Preload,
            PromptSettings::from(config),
            &self.lexicon.joined(),
        );
        let settings = ProviderSettings::from_config(config);

        match self.ai.dispatch(plan, settings) {
            Ok(dispatched) => self.preload_request = Some(dispatched.request_id),
            Err(e) => self.logs.push(format!("Warm-up skipped: {}", e)),
        }
    }

    /// Push the current config into the clipboard mirror
    pub fn apply_config(&mut self) {
        let config = self.config.config();
        self.clipboard.set_enabled(config.enable_clipboard_monitor);
        self.clipboard.set_backend(config.clipboard_backend);
    }

    /// Copy the chosen reply out through the clipboard mirror
    pub fn publish_reply(&mut self, reply: &str) {
        match self.clipboard.publish(reply) {
            Ok(()) => self.notification.show("Reply copied to clipboard"),
            Err(e) => {
                self.logs.push(format!("Clipboard error: {}", e));
                self.notification
                    .show_warning(&format!("Could not copy reply: {}", e));
            }
        }
    }

    /// Drain worker messages; a vanished worker ends the current turn
    pub fn poll_ai_responses(&mut self) {
        let was_connected = self.ai.is_connected();
        for response in self.ai.poll_responses() {
            self.handle_ai_response(response);
        }

        if was_connected && !self.ai.is_connected() {
            const STOPPED: &str = "Request worker has stopped";
            self.conversation.fail(None, STOPPED);
            self.flush_conversation_log();
            self.logs.push(STOPPED);
            self.notification.show_error(STOPPED);
        }
    }

    /// Route one worker message to the page it belongs to
    pub fn handle_ai_response(&mut self, response: AiResponse) {
        match response {
            AiResponse::Log(line) => self.logs.push(line),
            AiResponse::Payload(payload) => self.console.push(ConsoleLineKind::Outgoing, payload),
            AiResponse::Preloaded { request_id } => {
                if self.preload_request == Some(request_id) {
                    self.preload_request = None;
                }
            }
            AiResponse::Options {
                request_id,
                options,
            } => {
                let summary = options_summary(&options);
                if self.conversation.receive_options(request_id, options) {
                    self.chat.reset_highlight();
                    self.console.push(ConsoleLineKind::Options, summary);
                } else {
                    self.logs
                        .push(format!("Ignored options of request {}", request_id));
                }
            }
            AiResponse::Reply { request_id, text } => {
                if self.console.resolve(request_id) {
                    self.console.push(ConsoleLineKind::Incoming, text);
                } else {
                    log::debug!("Dropping reply of unknown request {}", request_id);
                }
            }
            AiResponse::Error {
                request_id,
                message,
            } => {
                if self.console.resolve(request_id) {
                    self.console.push(ConsoleLineKind::Error, message);
                } else if self.preload_request == Some(request_id) {
                    self.preload_request = None;
                    self.notification
                        .show_warning(&format!("Warm-up failed: {}", message));
                } else if self.conversation.fail(Some(request_id), &message) {
                    self.chat.reset_highlight();
                    self.notification.show_warning(&message);
                }
            }
        }
        self.flush_conversation_log();
    }

    /// Sample the clipboard when due and offer new external text to the chat
    pub fn poll_clipboard(&mut self, now: Instant) {
        if let Some(text) = self.clipboard.poll_if_due(now) {
            self.receive_clipboard_text(&text);
        }
    }

    /// Fill the chat input with externally copied text while idle
    pub fn receive_clipboard_text(&mut self, text: &str) {
        let Some(text) = self.clipboard.on_change(text) else {
            return;
        };
        if !self.conversation.is_idle() {
            self.logs
                .push("Clipboard changed while waiting for options; ignored");
            return;
        }

        self.chat.set_input(&text);
        self.logs.push("Loaded clipboard text into the input");
        self.notification.show("Clipboard text loaded");
    }
}

/// One `[label] content` line per option
fn options_summary(options: &ReplyOptions) -> String {
    options
        .iter()
        .map(|o| format!("[{}] {}", o.label, o.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
