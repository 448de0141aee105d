//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use pypal_app::{AppState, UiMode};

use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - state is read, never modified.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area, state.playground_open);

    frame.render_widget(widgets::Header::new(), areas.header);
    frame.render_widget(widgets::TutorSelector::new(state), areas.tutors);
    frame.render_widget(
        widgets::AchievementBoard::new(&state.achievements),
        areas.achievements,
    );
    frame.render_widget(widgets::ChallengeBoard::new(state), areas.challenges);
    frame.render_widget(widgets::ChatPanel::new(state), areas.chat);

    if let Some(playground_area) = areas.playground {
        frame.render_widget(widgets::Playground::new(state), playground_area);
    }

    if layout::use_compact_status(area) {
        frame.render_widget(widgets::StatusBarCompact::new(state), areas.status);
    } else {
        frame.render_widget(widgets::StatusBar::new(state), areas.status);
    }

    // Modal overlays
    match state.ui_mode {
        UiMode::Settings => {
            frame.render_widget(
                widgets::SettingsPanel::new(&state.settings_view_state),
                area,
            );
        }
        UiMode::Normal => {
            // No overlay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_view_renders_all_regions() {
        let state = AppState::new();
        let content = render_to_string(&state);
        assert!(content.contains("PythonPal"));
        assert!(content.contains("Choose Your Tutor"));
        assert!(content.contains("Your Achievements"));
        assert!(content.contains("Coding Challenges"));
        assert!(content.contains("Chat"));
    }

    #[test]
    fn test_playground_hidden_by_default() {
        let state = AppState::new();
        assert!(!render_to_string(&state).contains("Code Playground"));
    }

    #[test]
    fn test_playground_visible_when_open() {
        let mut state = AppState::new();
        state.toggle_playground();
        assert!(render_to_string(&state).contains("Code Playground"));
    }

    #[test]
    fn test_settings_overlay_only_in_settings_mode() {
        let mut state = AppState::new();
        assert!(!render_to_string(&state).contains("API Key"));

        state.show_settings();
        assert!(render_to_string(&state).contains("API Key"));
    }
}
