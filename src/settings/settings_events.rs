use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use crate::app::App;

pub fn handle_settings_key(app: &mut App, key: KeyEvent) {
    let save = key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL);

    if app.settings.is_editing() {
        handle_editor_key(app, key, save);
        return;
    }

    match key.code {
        _ if save => save_settings(app),
        KeyCode::Up | KeyCode::Char('k') => app.settings.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.settings.move_down(),
        KeyCode::Left => {
            app.settings.cycle(false);
        }
        KeyCode::Right => {
            app.settings.cycle(true);
        }
        KeyCode::Char(' ') => {
            if !app.settings.toggle() {
                app.settings.cycle(true);
            }
        }
        KeyCode::Enter => {
            if !app.settings.toggle() {
                app.settings.begin_edit();
            }
        }
        KeyCode::Esc => {
            if app.settings.is_dirty(app.config.config()) {
                app.settings.revert(app.config.config());
                app.notification.show("Changes discarded");
            }
        }
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent, save: bool) {
    match key.code {
        KeyCode::Enter => commit_edit(app),
        _ if save => {
            commit_edit(app);
            if !app.settings.is_editing() {
                save_settings(app);
            }
        }
        KeyCode::Esc => app.settings.cancel_edit(),
        _ => {
            if let Some(editor) = app.settings.editor_mut() {
                editor.input(Input::from(key));
            }
        }
    }
}

fn commit_edit(app: &mut App) {
    if let Err(e) = app.settings.commit_edit() {
        app.notification.show_warning(&e.to_string());
    }
}

/// Persist the draft, then re-run the warm-up and apply the clipboard toggle
pub fn save_settings(app: &mut App) {
    let draft = app.settings.draft().clone();

    match app.config.replace(draft) {
        Ok(()) => {
            app.logs.push("Settings saved");
            app.notification.show("Settings saved");
            app.apply_config();
            app.run_preload();
        }
        Err(e) => {
            app.logs.push(format!("Failed to save settings: {}", e));
            app.notification
                .show_error(&format!("Failed to save settings: {}", e));
        }
    }
}

#[cfg(test)]
#[path = "settings_events_tests.rs"]
mod settings_events_tests;
