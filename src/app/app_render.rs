use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Page};
use crate::notification::render_notification;
use crate::theme;
use crate::{chat, console, logs, settings};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_tabs(frame, layout[0]);

        match self.page {
            Page::Chat => chat::chat_render::render_page(self, frame, layout[1]),
            Page::Settings => settings::settings_render::render_page(self, frame, layout[1]),
            Page::Logs => logs::logs_render::render_page(self, frame, layout[1]),
            Page::Console => console::console_render::render_page(self, frame, layout[1]),
        }

        self.render_status(frame, layout[2]);

        render_notification(frame, &mut self.notification);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for page in Page::ALL {
            let style = if page == self.page {
                theme::tabs::ACTIVE
            } else {
                theme::tabs::INACTIVE
            };
            spans.push(Span::styled(
                format!("F{}", page.function_key()),
                Style::default().fg(theme::tabs::KEY),
            ));
            spans.push(Span::styled(format!(" {} ", page.title()), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = self.key_hints();
        let mut spans = Vec::new();
        for (i, (key, description)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", theme::status::DESCRIPTION));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme::status::KEY)));
            spans.push(Span::styled(format!(" {}", description), theme::status::DESCRIPTION));
        }

        let model = format!(
            "{} | {} ",
            self.config.config().model,
            self.conversation.phase()
        );
        let layout = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(model.chars().count() as u16),
        ])
        .split(area);

        frame.render_widget(Paragraph::new(Line::from(spans)), layout[0]);
        frame.render_widget(
            Paragraph::new(Span::styled(model, Style::default().fg(theme::status::MODEL))),
            layout[1],
        );
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.page {
            Page::Chat if self.conversation.options().is_some() => vec![
                ("1-3", "choose"),
                ("r", "regenerate"),
                ("Esc", "cancel"),
            ],
            Page::Chat if !self.conversation.is_idle() => {
                vec![("Esc", "cancel"), ("Ctrl+R", "regenerate"), ("Ctrl+Q", "quit")]
            }
            Page::Chat => vec![("Enter", "send"), ("PgUp/PgDn", "scroll"), ("Ctrl+Q", "quit")],
            Page::Settings if self.settings.is_editing() => {
                vec![("Enter", "apply"), ("Esc", "discard"), ("Ctrl+S", "save")]
            }
            Page::Settings => vec![
                ("Enter", "edit"),
                ("Space", "toggle"),
                ("←/→", "cycle"),
                ("Ctrl+S", "save"),
            ],
            Page::Logs => vec![("↑/↓", "scroll"), ("End", "follow"), ("Ctrl+L", "clear")],
            Page::Console => vec![("Enter", "send"), ("PgUp/PgDn", "scroll"), ("Ctrl+L", "clear")],
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
