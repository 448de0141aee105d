//! Achievement board widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use pypal_core::Achievement;

use crate::theme;

/// Display-only badge board
pub struct AchievementBoard<'a> {
    achievements: &'a [Achievement],
}

impl<'a> AchievementBoard<'a> {
    pub fn new(achievements: &'a [Achievement]) -> Self {
        Self { achievements }
    }
}

impl Widget for AchievementBoard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Your Achievements ")
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(theme::dim());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .achievements
            .iter()
            .map(|a| {
                let glyph = if a.earned { "🏆" } else { "○ " };
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(glyph, theme::badge(a.earned)),
                    Span::raw(" "),
                    Span::styled(a.title, theme::badge(a.earned)),
                    Span::raw("  "),
                    Span::styled(a.description, theme::dim()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pypal_core::catalog;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(achievements: &[Achievement]) -> String {
        let backend = TestBackend::new(80, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(AchievementBoard::new(achievements), frame.area()))
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
    fn test_board_lists_all_badges() {
        let board = catalog::achievements();
        let content = render_to_string(&board);
        assert!(content.contains("First Code"));
        assert!(content.contains("Bug Hunter"));
        assert!(content.contains("Loop Master"));
    }

    #[test]
    fn test_earned_badge_shows_trophy() {
        let mut board = catalog::achievements();
        assert!(!render_to_string(&board).contains("🏆"));

        board[0].earned = true;
        assert!(render_to_string(&board).contains("🏆"));
    }
}
