use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::display_value;
use crate::app::App;
use crate::config::{ConfigKey, ConfigValue};
use crate::theme;

const EDITOR_HEIGHT: u16 = 3;
const KEY_COLUMN_WIDTH: usize = 26;

pub fn render_page(app: &mut App, frame: &mut Frame, area: Rect) {
    let editing = app.settings.is_editing();
    let layout = if editing {
        Layout::vertical([Constraint::Min(3), Constraint::Length(EDITOR_HEIGHT)]).split(area)
    } else {
        Layout::vertical([Constraint::Min(3), Constraint::Length(0)]).split(area)
    };

    render_list(app, frame, layout[0]);

    if let Some(editor) = app.settings.editor() {
        frame.render_widget(editor, layout[1]);
    }
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let draft = app.settings.draft();
    let dirty = app.settings.is_dirty(app.config.config());

    let mut title = vec![Span::raw(" Settings ")];
    if dirty {
        title.push(Span::styled(
            "[unsaved: Ctrl+S to save, Esc to discard] ",
            Style::default().fg(theme::settings::UNSAVED),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title))
        .border_style(Style::default().fg(theme::settings::BORDER));

    let lines: Vec<Line> = ConfigKey::ALL
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let value = display_value(draft, *key);
            let value_style = match (key, draft.get(*key)) {
                (_, ConfigValue::Flag(true)) => Style::default().fg(theme::settings::FLAG_ON),
                (_, ConfigValue::Flag(false)) => Style::default().fg(theme::settings::FLAG_OFF),
                (ConfigKey::ApiKey, _) => Style::default().fg(theme::settings::SECRET),
                _ => Style::default().fg(theme::settings::VALUE),
            };

            let line = Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", key.name(), width = KEY_COLUMN_WIDTH),
                    Style::default().fg(theme::settings::KEY),
                ),
                Span::styled(value, value_style),
            ]);
            if i == app.settings.cursor() {
                line.style(Style::default().bg(theme::settings::SELECTED_BG).bold())
            } else {
                line
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
#[path = "settings_render_tests.rs"]
mod settings_render_tests;
