use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::{App, Page};

/// Keys that work on every page; returns true when the key was consumed
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::F(n) => match Page::from_function_key(n) {
            Some(page) => {
                switch_page(app, page);
                true
            }
            None => false,
        },
        KeyCode::Right if ctrl => {
            switch_page(app, app.page.next());
            true
        }
        KeyCode::Left if ctrl => {
            switch_page(app, app.page.previous());
            true
        }
        // A permanent error is dismissed before Esc reaches the page
        KeyCode::Esc if app.notification.has_error() => {
            app.notification.dismiss();
            true
        }
        _ => false,
    }
}

fn switch_page(app: &mut App, page: Page) {
    if app.page == Page::Settings && page != Page::Settings {
        app.settings.cancel_edit();
    }
    app.page = page;
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
