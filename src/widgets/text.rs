//! Line wrapping and bottom-anchored scrolling for the text panes

use ratatui::text::Span;

/// Display width of `s` in terminal columns
pub fn display_width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Wrap text to `max_width` columns, breaking at word boundaries
///
/// Leading indentation of each source line is kept on its first output line.
/// Words wider than a whole line (e.g. unspaced CJK text) are broken
/// between characters.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let indent = &paragraph[..paragraph.len() - paragraph.trim_start().len()];
        let mut current = String::new();
        let mut current_width = 0;
        if display_width(indent) < max_width {
            current.push_str(indent);
            current_width = display_width(indent);
        }
        let mut has_words = false;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);
            if has_words && current_width + 1 + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }
            if has_words {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            has_words = true;
            if current_width + word_width <= max_width {
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            let mut buf = [0u8; 4];
            for ch in word.chars() {
                let ch_width = display_width(ch.encode_utf8(&mut buf));
                if current_width + ch_width > max_width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Range of `total` lines visible in `height` rows when scrolled
/// `scroll_from_bottom` lines up from the end
pub fn tail_window(total: usize, height: usize, scroll_from_bottom: usize) -> (usize, usize) {
    let max_scroll = total.saturating_sub(height);
    let start = max_scroll - scroll_from_bottom.min(max_scroll);
    (start, (start + height).min(total))
}
