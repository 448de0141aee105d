//! Challenge board widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use pypal_app::{AppState, Focus};

use crate::theme;

/// The coding challenge catalog with a start cursor
pub struct ChallengeBoard<'a> {
    state: &'a AppState,
}

impl<'a> ChallengeBoard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ChallengeBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Challenges;
        let block = Block::default()
            .title(" Coding Challenges ")
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(theme::focus_border(focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(self.state.challenges.len());
        for (i, challenge) in self.state.challenges.iter().enumerate() {
            let under_cursor = focused && i == self.state.challenge_cursor;
            let marker = if under_cursor { "▶ " } else { "  " };

            let mut spans = vec![
                Span::styled(marker, theme::cursor_row(under_cursor)),
                Span::styled(challenge.title, theme::cursor_row(under_cursor)),
            ];
            // The completion star never lights up today; no grading exists
            if challenge.completed {
                spans.push(Span::styled(" ⭐", theme::key_hint()));
            }
            spans.push(Span::raw("  "));
            spans.push(Span::styled(challenge.description, theme::dim()));

            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            "  [Enter] Start Challenge",
            theme::dim(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(90, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(ChallengeBoard::new(state), frame.area()))
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
    fn test_board_lists_challenges() {
        let state = AppState::new();
        let content = render_to_string(&state);
        assert!(content.contains("Hello World"));
        assert!(content.contains("Simple Calculator"));
    }

    #[test]
    fn test_no_completion_star_by_default() {
        let state = AppState::new();
        assert!(!render_to_string(&state).contains('⭐'));
    }
}
