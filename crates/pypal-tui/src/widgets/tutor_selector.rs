//! Tutor selector widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use pypal_app::{AppState, Focus};

use crate::theme;

/// The fixed tutor roster with selection and cursor highlight
pub struct TutorSelector<'a> {
    state: &'a AppState,
}

impl<'a> TutorSelector<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for TutorSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Tutors;
        let block = Block::default()
            .title(" Choose Your Tutor ")
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(theme::focus_border(focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(self.state.tutors.len());
        for (i, tutor) in self.state.tutors.iter().enumerate() {
            let under_cursor = focused && i == self.state.tutor_cursor;
            let is_selected = i == self.state.selected_tutor;

            let marker = if under_cursor { "▶ " } else { "  " };
            let name_style = if is_selected {
                theme::selected_tutor()
            } else {
                theme::cursor_row(under_cursor)
            };

            lines.push(Line::from(vec![
                Span::styled(marker, theme::cursor_row(under_cursor)),
                Span::raw(tutor.avatar),
                Span::raw(" "),
                Span::styled(tutor.name, name_style),
                Span::styled(if is_selected { "  ✓ " } else { "    " }, name_style),
                Span::styled(tutor.description, theme::dim()),
            ]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(90, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(TutorSelector::new(state), frame.area()))
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
    fn test_roster_renders_all_tutors() {
        let state = AppState::new();
        let content = render_to_string(&state);
        assert!(content.contains("Py the Snake"));
        assert!(content.contains("Professor Binary"));
        assert!(content.contains("Data the Dragon"));
    }

    #[test]
    fn test_selected_tutor_is_marked() {
        let mut state = AppState::new();
        state.select_tutor(1);
        let content = render_to_string(&state);
        assert!(content.contains('✓'));
    }
}
