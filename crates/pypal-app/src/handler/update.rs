//! Main update function - handles state transitions (TEA pattern)

use pypal_core::AppPhase;

use crate::message::Message;
use crate::state::AppState;

use super::{chat, keys::handle_key, playground, settings_handlers, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            // Nothing animates between events; the tick exists so the loop
            // stays responsive to channel messages while idle.
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus_prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tutor Selector Messages
        // ─────────────────────────────────────────────────────────
        Message::TutorCursorUp => {
            state.tutor_cursor_up();
            UpdateResult::none()
        }

        Message::TutorCursorDown => {
            state.tutor_cursor_down();
            UpdateResult::none()
        }

        Message::SelectTutor(index) => {
            state.select_tutor(index);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Challenge Board Messages
        // ─────────────────────────────────────────────────────────
        Message::ChallengeCursorUp => {
            state.challenge_cursor_up();
            UpdateResult::none()
        }

        Message::ChallengeCursorDown => {
            state.challenge_cursor_down();
            UpdateResult::none()
        }

        Message::StartChallenge(index) => playground::handle_start_challenge(state, index),

        // ─────────────────────────────────────────────────────────
        // Chat Messages
        // ─────────────────────────────────────────────────────────
        Message::ChatInput(c) => chat::handle_input(state, c),
        Message::ChatBackspace => chat::handle_backspace(state),
        Message::ChatClear => chat::handle_clear(state),
        Message::ChatSubmit => chat::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Playground Messages
        // ─────────────────────────────────────────────────────────
        Message::EditorInput(c) => {
            state.editor.push_char(c);
            UpdateResult::none()
        }

        Message::EditorBackspace => {
            state.editor.backspace();
            UpdateResult::none()
        }

        Message::EditorNewline => {
            state.editor.newline();
            UpdateResult::none()
        }

        Message::RunCode => playground::handle_run(state),

        Message::TogglePlayground => {
            state.toggle_playground();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Settings Messages
        // ─────────────────────────────────────────────────────────
        Message::ShowSettings => {
            state.show_settings();
            UpdateResult::none()
        }

        Message::SettingsInput(c) => settings_handlers::handle_input(state, c),
        Message::SettingsBackspace => settings_handlers::handle_backspace(state),
        Message::SettingsClear => settings_handlers::handle_clear(state),
        Message::SettingsSave => settings_handlers::handle_save(state),
        Message::SettingsCancel => settings_handlers::handle_cancel(state),
    }
}
