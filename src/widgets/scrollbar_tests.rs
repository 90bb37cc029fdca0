use ratatui::{Terminal, backend::TestBackend, layout::Rect, style::Color};

use super::render_vertical_scrollbar;

/// Render into a 5 x `height` terminal and return the right-most column
fn right_column(total: usize, viewport: usize, offset: usize, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(5, height)).unwrap();
    terminal
        .draw(|frame| {
            render_vertical_scrollbar(
                frame,
                Rect::new(0, 0, 5, height),
                total,
                viewport,
                offset,
                Color::White,
            );
        })
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| buffer[(4, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_nothing_drawn_when_content_fits() {
    let column = right_column(5, 10, 0, 10);
    assert!(column.iter().all(|s| s == " "));
}

#[test]
fn test_nothing_drawn_for_exact_fit() {
    let column = right_column(10, 10, 0, 10);
    assert!(column.iter().all(|s| s == " "));
}

#[test]
fn test_nothing_drawn_for_zero_viewport() {
    let column = right_column(50, 0, 0, 10);
    assert!(column.iter().all(|s| s == " "));
}

#[test]
fn test_drawn_when_content_overflows() {
    let column = right_column(11, 10, 0, 10);
    assert!(column.iter().all(|s| s != " "));
}

#[test]
fn test_thumb_at_top_when_not_scrolled() {
    let column = right_column(30, 12, 0, 12);
    assert_eq!(column[0], "█");
    assert_ne!(column[11], "█");
}

#[test]
fn test_thumb_reaches_bottom_at_max_scroll() {
    let column = right_column(30, 12, 18, 12);
    assert_eq!(column[11], "█");
    assert_ne!(column[0], "█");
}

#[test]
fn test_offset_past_end_is_clamped() {
    assert_eq!(right_column(30, 12, 90, 12), right_column(30, 12, 18, 12));
}
