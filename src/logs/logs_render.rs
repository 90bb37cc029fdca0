use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::widgets::{scrollbar, text};

/// Render the Logs page, newest entries at the bottom
pub fn render_page(app: &mut App, frame: &mut Frame, area: Rect) {
    let logs = &app.logs;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Logs ({}) ", logs.len()))
        .border_style(Style::default().fg(theme::logs::BORDER));

    let height = area.height.saturating_sub(2) as usize;
    let (start, end) = text::tail_window(logs.len(), height, logs.scroll_from_bottom());

    let lines: Vec<Line> = logs
        .entries()
        .range(start..end)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", entry.timestamp),
                    Style::default().fg(theme::logs::TIMESTAMP),
                ),
                Span::styled(entry.text.as_str(), Style::default().fg(theme::logs::TEXT)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
    scrollbar::render_vertical_scrollbar(
        frame,
        area,
        logs.len(),
        height,
        start,
        theme::logs::BORDER,
    );
}
