//! Tests for notification_render

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use super::*;

fn render_lines(notification: &mut NotificationState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn columns(line: &str, start: usize, width: usize) -> String {
    line.chars().skip(start).take(width).collect()
}

#[test]
fn test_notification_in_top_right_corner() {
    let mut notification = NotificationState::new();
    notification.show("Reply copied");

    let lines = render_lines(&mut notification, 60, 12);
    // " Reply copied " is 14 wide, plus 2 borders, plus the 2 column margin
    assert_eq!(columns(&lines[3], 42, 16), "│ Reply copied │");
    assert!(columns(&lines[2], 42, 16).starts_with('┌'));
    assert!(lines[0].trim().is_empty());
}

#[test]
fn test_no_notification_renders_nothing() {
    let mut notification = NotificationState::new();
    let lines = render_lines(&mut notification, 40, 10);
    assert!(lines.iter().all(|l| l.trim().is_empty()));
}

#[test]
fn test_tiny_terminal_skips_render() {
    let mut notification = NotificationState::new();
    notification.show("hello");
    let lines = render_lines(&mut notification, 40, 5);
    assert!(lines.iter().all(|l| l.trim().is_empty()));
}
