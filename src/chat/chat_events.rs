use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use crate::ai::prompt::{PromptMode, PromptSettings, build_messages};
use crate::ai::provider::ProviderSettings;
use crate::ai::reply_option::OPTION_COUNT;
use crate::app::App;
use crate::console::ConsoleLineKind;

const PAGE_SCROLL: usize = 5;

pub fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::PageUp => app.chat.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.chat.scroll_down(PAGE_SCROLL),
        _ if app.conversation.options().is_some() => handle_options_key(app, key),
        _ if !app.conversation.is_idle() => handle_waiting_key(app, key),
        _ => handle_input_key(app, key),
    }
}

fn is_regenerate(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('r')
        && (key.modifiers.is_empty() || key.modifiers.contains(KeyModifiers::CONTROL))
}

fn handle_options_key(app: &mut App, key: KeyEvent) {
    if is_regenerate(&key) {
        regenerate(app);
        return;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as u8 - b'1') as usize;
            if index < OPTION_COUNT {
                choose_option(app, index);
            }
        }
        KeyCode::Up => app.chat.highlight_previous(),
        KeyCode::Down | KeyCode::Tab => app.chat.highlight_next(),
        KeyCode::Enter => {
            let index = app.chat.highlighted();
            choose_option(app, index);
        }
        KeyCode::Esc => cancel_turn(app),
        _ => {}
    }
}

/// Input is locked while options are generated; only cancel and regenerate apply
fn handle_waiting_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel_turn(app),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => regenerate(app),
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit(app),
        KeyCode::Esc => app.chat.clear_input(),
        _ => {
            app.chat.input.input(Input::from(key));
        }
    }
}

/// Start a turn with the typed input
pub fn submit(app: &mut App) {
    let text = app.chat.input_text().to_string();
    let Some(input) = app.conversation.submit(&text) else {
        return;
    };

    app.chat.clear_input();
    app.chat.reset_highlight();
    app.chat.scroll_to_bottom();
    dispatch_generation(app, &input);
}

/// Confirm option `index`, then mirror the reply to the clipboard and console
pub fn choose_option(app: &mut App, index: usize) {
    let reply = app.conversation.select(index);
    app.flush_conversation_log();
    let Some(reply) = reply else {
        return;
    };

    app.chat.reset_highlight();
    app.chat.scroll_to_bottom();
    app.console.push(ConsoleLineKind::Incoming, reply.as_str());
    app.publish_reply(&reply);
}

pub fn cancel_turn(app: &mut App) {
    if app.conversation.cancel() {
        app.chat.reset_highlight();
    }
    app.flush_conversation_log();
}

/// Discard the options and ask again with the same input
pub fn regenerate(app: &mut App) {
    let Some(input) = app.conversation.regenerate() else {
        app.flush_conversation_log();
        return;
    };

    app.chat.reset_highlight();
    dispatch_generation(app, &input);
}

fn dispatch_generation(app: &mut App, input: &str) {
    let config = app.config.config();
    let plan = build_messages(
        PromptMode::GenerateOptions {
            input,
            history: app.conversation.history(),
        },
        PromptSettings::from(config),
        &app.lexicon.joined(),
    );
    let settings = ProviderSettings::from_config(config);

    match app.ai.dispatch(plan, settings) {
        Ok(dispatched) => app.conversation.attach_request(dispatched),
        Err(e) => {
            let message = e.to_string();
            app.conversation.fail(None, &message);
            app.notification.show_warning(&message);
        }
    }
    app.flush_conversation_log();
}

#[cfg(test)]
#[path = "chat_events_tests.rs"]
mod chat_events_tests;
