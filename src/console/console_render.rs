use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::ConsoleLineKind;
use crate::app::App;
use crate::theme;
use crate::widgets::{scrollbar, text};

fn prefix_and_color(kind: ConsoleLineKind) -> (&'static str, Color) {
    use theme::console::*;
    match kind {
        ConsoleLineKind::Prompt => ("> ", PROMPT),
        ConsoleLineKind::Outgoing => ("=> ", OUTGOING),
        ConsoleLineKind::Options => ("?? ", OPTIONS),
        ConsoleLineKind::Incoming => ("<= ", INCOMING),
        ConsoleLineKind::System => ("-- ", SYSTEM),
        ConsoleLineKind::Error => ("!! ", ERROR),
    }
}

pub fn render_page(app: &mut App, frame: &mut Frame, area: Rect) {
    let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(area);
    let (output_area, input_area) = (layout[0], layout[1]);

    let title = match app.console.pending_count() {
        0 => " Console ".to_string(),
        n => format!(" Console ({} waiting) ", n),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme::console::BORDER))
        .style(Style::default().bg(theme::console::BACKGROUND));

    let width = output_area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for line in app.console.lines() {
        let (prefix, color) = prefix_and_color(line.kind);
        let body_width = width.saturating_sub(prefix.len()).max(1);
        for (i, wrapped) in text::wrap_text(&line.text, body_width).into_iter().enumerate() {
            let lead = if i == 0 { prefix } else { "   " };
            lines.push(Line::from(vec![
                Span::styled(lead, Style::default().fg(color)),
                Span::styled(wrapped, Style::default().fg(color)),
            ]));
        }
    }

    let height = output_area.height.saturating_sub(2) as usize;
    let total = lines.len();
    let (start, end) = text::tail_window(total, height, app.console.scroll_from_bottom());
    let visible: Vec<Line> = lines.drain(start..end).collect();

    frame.render_widget(Paragraph::new(visible).block(block), output_area);
    scrollbar::render_vertical_scrollbar(
        frame,
        output_area,
        total,
        height,
        start,
        theme::console::BORDER,
    );

    frame.render_widget(&app.console.input, input_area);
}
