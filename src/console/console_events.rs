use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use super::ConsoleLineKind;
use crate::ai::prompt::{PromptMode, PromptSettings, build_messages};
use crate::ai::provider::ProviderSettings;
use crate::app::App;

const PAGE_SCROLL: usize = 10;

pub fn handle_console_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => send_direct_chat(app),
        KeyCode::PageUp => app.console.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.console.scroll_down(PAGE_SCROLL),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.console.clear();
        }
        _ => {
            app.console.input.input(Input::from(key));
        }
    }
}

/// Send the typed line as a `DirectChat` request
///
/// Runs beside any chat turn; the conversation state is never consulted.
pub fn send_direct_chat(app: &mut App) {
    let input = app.console.take_input();
    let input = input.trim();
    if input.is_empty() {
        return;
    }

    app.console.push(ConsoleLineKind::Prompt, input);

    let config = app.config.config();
    let plan = build_messages(
        PromptMode::DirectChat { input },
        PromptSettings::from(config),
        &app.lexicon.joined(),
    );
    let settings = ProviderSettings::from_config(config);

    match app.ai.dispatch(plan, settings) {
        Ok(dispatched) => app.console.track(dispatched.request_id),
        Err(e) => {
            app.console.push(ConsoleLineKind::Error, e.to_string());
            app.logs.push(format!("Direct chat not sent: {}", e));
        }
    }
}

#[cfg(test)]
#[path = "console_events_tests.rs"]
mod console_events_tests;
