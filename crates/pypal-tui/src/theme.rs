//! Shared styling helpers
//!
//! Semantic style builders so widgets agree on what "selected", "focused",
//! and "earned" look like.

use ratatui::style::{Color, Modifier, Style};

/// App title styling
pub fn title() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// De-emphasized chrome (hints, separators)
pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Keyboard shortcut highlight
pub fn key_hint() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Border style for a region, keyed on focus
pub fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Style for a list row, keyed on cursor position
pub fn cursor_row(under_cursor: bool) -> Style {
    if under_cursor {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Style for the active tutor row
pub fn selected_tutor() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Badge styling, keyed on the earned flag
pub fn badge(earned: bool) -> Style {
    if earned {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// User chat bubble text
pub fn user_bubble() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Assistant chat bubble text
pub fn assistant_bubble() -> Style {
    Style::default().fg(Color::White)
}
