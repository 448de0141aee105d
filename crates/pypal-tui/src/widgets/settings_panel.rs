//! Settings modal widget
//!
//! A centered overlay holding the single API key field. The value is masked
//! on screen; the underlying state keeps it in plain text for the session.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use pypal_app::SettingsViewState;

use crate::theme;

/// Settings modal widget
pub struct SettingsPanel<'a> {
    state: &'a SettingsViewState,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a SettingsViewState) -> Self {
        Self { state }
    }

    /// Calculate centered modal rect
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fixed modal size
        let modal_width = 50;
        let modal_height = 9;
        let modal_area = Self::centered_rect(modal_width, modal_height, area);

        // Clear the area behind the modal
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(" Settings ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        // Layout: label + field + hint row
        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Label
            Constraint::Length(1), // Field
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Rest
        ])
        .split(inner);

        Paragraph::new(" API Key").render(chunks[1], buf);

        // Masked field, like the source UI's password input
        let field = if self.state.api_key.is_empty() {
            Line::from(Span::styled(" Enter your API key", theme::dim()))
        } else {
            Line::from(Span::styled(
                format!(" {}█", "•".repeat(self.state.api_key.chars().count())),
                theme::key_hint(),
            ))
        };
        Paragraph::new(field).render(chunks[2], buf);

        Paragraph::new(Line::from(Span::styled(
            " Kept in memory only - nothing is stored",
            theme::dim(),
        )))
        .render(chunks[3], buf);

        // Buttons
        let buttons = Line::from(vec![
            Span::styled("[", theme::dim()),
            Span::styled("Enter", theme::key_hint()),
            Span::styled("] Save  ", theme::dim()),
            Span::styled("[", theme::dim()),
            Span::styled("Esc", theme::key_hint()),
            Span::styled("] Cancel", theme::dim()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &SettingsViewState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(SettingsPanel::new(state), frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_modal_renders_title_and_buttons() {
        let state = SettingsViewState::new();
        let content = render_to_string(&state);
        assert!(content.contains("Settings"));
        assert!(content.contains("API Key"));
        assert!(content.contains("Save"));
        assert!(content.contains("Cancel"));
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let state = SettingsViewState::new();
        assert!(render_to_string(&state).contains("Enter your API key"));
    }

    #[test]
    fn test_value_is_masked() {
        let mut state = SettingsViewState::new();
        for c in "secret".chars() {
            state.push_char(c);
        }
        let content = render_to_string(&state);
        assert!(!content.contains("secret"));
        assert!(content.contains("••••••"));
    }
}
