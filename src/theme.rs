//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files reference
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    // Shared cursor style for textarea widgets
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Page tabs along the top edge
pub mod tabs {
    use super::*;

    pub const ACTIVE: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const INACTIVE: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const KEY: Color = palette::TEXT_DIM;
}

/// Chat page styles
pub mod chat {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BORDER_BUSY: Color = palette::ORANGE;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const USER_NAME: Style = Style::new()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::BOLD);
    pub const AI_NAME: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const MESSAGE: Color = palette::TEXT;

    /// Transcript style while options are shown on top of it
    pub const DIMMED: Modifier = Modifier::DIM;

    pub const INPUT_BORDER: Color = palette::CYAN;
    pub const INPUT_DISABLED: Color = palette::TEXT_DIM;
    pub const STATUS_WAITING: Color = palette::ORANGE;
}

/// Option overlay styles
pub mod options {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const LABEL: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);
    pub const CONTENT: Color = palette::TEXT;
    pub const SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const NUMBER: Color = palette::TEXT_MUTED;
    pub const HINT_KEY: Color = palette::CYAN;
    pub const HINT_TEXT: Color = palette::TEXT_MUTED;
}

/// Settings page styles
pub mod settings {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const KEY: Color = palette::MAGENTA;
    pub const VALUE: Color = palette::TEXT;
    pub const SECRET: Color = palette::TEXT_MUTED;
    pub const SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const EDITING_BORDER: Color = palette::CYAN;
    pub const FLAG_ON: Color = palette::SUCCESS;
    pub const FLAG_OFF: Color = palette::TEXT_DIM;
    pub const UNSAVED: Color = palette::WARNING;
}

/// Logs page styles
pub mod logs {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const TIMESTAMP: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT_MUTED;
}

/// Diagnostic console styles
pub mod console {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = Color::Rgb(18, 18, 30);
    pub const PROMPT: Color = palette::SUCCESS;
    pub const OUTGOING: Color = palette::ORANGE;
    pub const OPTIONS: Color = palette::PURPLE;
    pub const INCOMING: Color = palette::CYAN;
    pub const SYSTEM: Color = palette::TEXT_MUTED;
    pub const ERROR: Color = palette::ERROR;
}

/// Bottom status line
pub mod status {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::DIM);
    pub const MODEL: Color = palette::TEXT_MUTED;
}

/// Notification colors
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = palette::BG_SURFACE;
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = palette::BG_DARK;
    pub const WARNING_BG: Color = palette::WARNING;
    pub const WARNING_BORDER: Color = palette::WARNING;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = Color::Rgb(140, 40, 50);
    pub const ERROR_BORDER: Color = palette::ERROR;
}
