//! Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use pypal_app::AppState;
use pypal_core::AppPhase;

use crate::theme;

/// Full status bar: phase, tutor, badge count, and the session tip
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Phase indicator span (exposed for tests)
    pub fn state_indicator(&self) -> Span<'static> {
        match self.state.phase {
            AppPhase::Running => Span::styled("● Ready", Style::default().fg(Color::Green)),
            AppPhase::Quitting => Span::styled("● Bye!", Style::default().fg(Color::DarkGray)),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tutor = self.state.active_tutor();
        let content = Line::from(vec![
            Span::raw(" "),
            self.state_indicator(),
            Span::styled("  │  ", theme::dim()),
            Span::raw(tutor.avatar),
            Span::raw(" "),
            Span::raw(tutor.name),
            Span::styled("  │  ", theme::dim()),
            Span::styled(
                format!(
                    "🏆 {}/{}",
                    self.state.earned_count(),
                    self.state.achievements.len()
                ),
                theme::badge(self.state.earned_count() > 0),
            ),
            Span::styled("  │  ", theme::dim()),
            Span::styled(self.state.tip, theme::dim()),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}

/// Compact status bar for narrow terminals
pub struct StatusBarCompact<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarCompact<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarCompact<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = Line::from(vec![
            Span::raw(" "),
            StatusBar::new(self.state).state_indicator(),
            Span::styled("  │  ", theme::dim()),
            Span::styled(
                format!(
                    "🏆 {}/{}",
                    self.state.earned_count(),
                    self.state.achievements.len()
                ),
                theme::badge(self.state.earned_count() > 0),
            ),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
