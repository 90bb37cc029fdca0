use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

const PAGE_SCROLL: usize = 10;

pub fn handle_logs_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.logs.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.logs.scroll_down(1),
        KeyCode::PageUp => app.logs.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.logs.scroll_down(PAGE_SCROLL),
        KeyCode::Home | KeyCode::Char('g') => app.logs.scroll_up(usize::MAX),
        KeyCode::End | KeyCode::Char('G') => app.logs.scroll_to_bottom(),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => app.logs.clear(),
        _ => {}
    }
}
