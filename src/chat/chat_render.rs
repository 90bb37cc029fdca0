use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ai::reply_option::ReplyOptions;
use crate::app::App;
use crate::conversation::Speaker;
use crate::theme;
use crate::widgets::{popup, scrollbar, text};

const INPUT_HEIGHT: u16 = 3;
const OPTIONS_MAX_WIDTH: u16 = 72;
/// Columns taken by the "1. " numbering and the content indent
const OPTION_INDENT: &str = "   ";

/// Render the Chat page: transcript, input field and the option overlay
pub fn render_page(app: &mut App, frame: &mut Frame, area: Rect) {
    let layout =
        Layout::vertical([Constraint::Min(3), Constraint::Length(INPUT_HEIGHT)]).split(area);
    let (transcript_area, input_area) = (layout[0], layout[1]);

    render_transcript(app, frame, transcript_area);
    render_input(app, frame, input_area);

    if let Some(options) = app.conversation.options() {
        render_options(options, app.chat.highlighted(), frame, transcript_area);
    }
}

fn render_transcript(app: &App, frame: &mut Frame, area: Rect) {
    let config = app.config.config();
    let busy = !app.conversation.is_idle();
    let border = if busy {
        theme::chat::BORDER_BUSY
    } else {
        theme::chat::BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" Chat with {} ", config.ai_name))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme::chat::BACKGROUND));

    let width = area.width.saturating_sub(3) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for entry in app.conversation.transcript() {
        let (name, name_style, color) = match entry.speaker {
            Speaker::User => (
                config.user_name.as_str(),
                theme::chat::USER_NAME,
                theme::chat::MESSAGE,
            ),
            Speaker::Assistant => (
                config.ai_name.as_str(),
                theme::chat::AI_NAME,
                theme::chat::MESSAGE,
            ),
        };
        lines.push(Line::from(Span::styled(format!("{}:", name), name_style)));
        for wrapped in text::wrap_text(&entry.text, width.saturating_sub(2).max(1)) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default().fg(color),
            )));
        }
        lines.push(Line::default());
    }

    if busy && app.conversation.options().is_none() {
        lines.push(Line::from(Span::styled(
            format!("{} is thinking of replies...", config.ai_name),
            Style::default().fg(theme::chat::STATUS_WAITING).italic(),
        )));
    }

    // Options on screen: push the transcript into the background
    if app.conversation.options().is_some() {
        for line in &mut lines {
            line.style = line.style.add_modifier(theme::chat::DIMMED);
        }
    }

    let height = area.height.saturating_sub(2) as usize;
    let total = lines.len();
    let (start, end) = text::tail_window(total, height, app.chat.scroll_from_bottom());
    let visible: Vec<Line> = lines.drain(start..end).collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
    scrollbar::render_vertical_scrollbar(frame, area, total, height, start, border);
}

fn render_input(app: &mut App, frame: &mut Frame, area: Rect) {
    let idle = app.conversation.is_idle();
    let (title, color, cursor) = if idle {
        (" Message (Enter to send) ", theme::chat::INPUT_BORDER, theme::palette::CURSOR)
    } else {
        (
            " Waiting for options (Esc cancels) ",
            theme::chat::INPUT_DISABLED,
            Style::default(),
        )
    };

    app.chat.input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(color)),
    );
    app.chat.input.set_cursor_style(cursor);
    frame.render_widget(&app.chat.input, area);
}

/// Lines of the option overlay, numbered from 1
pub fn option_lines(
    options: &ReplyOptions,
    highlighted: usize,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, option) in options.iter().enumerate() {
        let selected_bg = if i == highlighted {
            Style::default().bg(theme::options::SELECTED_BG)
        } else {
            Style::default()
        };

        lines.push(
            Line::from(vec![
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default().fg(theme::options::NUMBER),
                ),
                Span::styled(format!("[{}]", option.label), theme::options::LABEL),
            ])
            .style(selected_bg),
        );
        let content_width = width.saturating_sub(OPTION_INDENT.len()).max(1);
        for wrapped in text::wrap_text(&option.content, content_width) {
            lines.push(
                Line::from(Span::styled(
                    format!("{}{}", OPTION_INDENT, wrapped),
                    Style::default().fg(theme::options::CONTENT),
                ))
                .style(selected_bg),
            );
        }
    }

    lines.push(Line::default());
    let hint = |key: &'static str, text: &'static str| {
        [
            Span::styled(key, Style::default().fg(theme::options::HINT_KEY)),
            Span::styled(text, Style::default().fg(theme::options::HINT_TEXT)),
        ]
    };
    lines.push(Line::from(
        [
            hint("1-3", " choose  "),
            hint("↑↓ Enter", " pick  "),
            hint("r", " regenerate  "),
            hint("Esc", " cancel"),
        ]
        .concat(),
    ));

    lines
}

fn render_options(options: &ReplyOptions, highlighted: usize, frame: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(4).min(OPTIONS_MAX_WIDTH);
    let lines = option_lines(options, highlighted, width.saturating_sub(2) as usize);
    let height = (lines.len() as u16).saturating_add(2);

    let popup_area = popup::centered_popup(area, width, height);
    popup::clear_area(frame, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Pick a reply ")
        .border_style(Style::default().fg(theme::options::BORDER))
        .style(Style::default().bg(theme::options::BACKGROUND));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

#[cfg(test)]
#[path = "chat_render_tests.rs"]
mod chat_render_tests;
