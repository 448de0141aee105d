//! Key event handlers for different UI modes and focus regions

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Settings => handle_key_settings(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in the settings modal
///
/// The modal captures all input; the regions underneath see nothing until
/// it closes.
fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        // Save and close (nothing is persisted)
        InputKey::Enter => Some(Message::SettingsSave),

        // Close without saving
        InputKey::Esc => Some(Message::SettingsCancel),

        // API key editing
        InputKey::Backspace => Some(Message::SettingsBackspace),
        InputKey::CharCtrl('u') => Some(Message::SettingsClear),
        InputKey::Char(c) => Some(Message::SettingsInput(c)),

        // Force quit even in the modal
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in normal mode
///
/// Control-modified keys are global so they keep working while the chat
/// input or the code buffer is swallowing plain characters.
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Force quit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Panel toggles (header buttons in the original layout)
        InputKey::CharCtrl('p') => Some(Message::TogglePlayground),
        InputKey::CharCtrl('o') => Some(Message::ShowSettings),

        // Focus cycling
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),

        // Everything else depends on which region owns the keyboard
        _ => match state.focus {
            Focus::Tutors => handle_key_tutors(state, key),
            Focus::Challenges => handle_key_challenges(state, key),
            Focus::Chat => handle_key_chat(key),
            Focus::Playground => handle_key_editor(key),
        },
    }
}

/// Keys for the tutor roster
fn handle_key_tutors(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::TutorCursorUp),
        InputKey::Down => Some(Message::TutorCursorDown),
        InputKey::Enter => Some(Message::SelectTutor(state.tutor_cursor)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Keys for the challenge board
fn handle_key_challenges(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::ChallengeCursorUp),
        InputKey::Down => Some(Message::ChallengeCursorDown),
        InputKey::Enter => Some(Message::StartChallenge(state.challenge_cursor)),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Keys for the chat input line
///
/// Plain characters type into the input, so quit-by-'q' is unavailable here;
/// Esc backs focus out of the input instead of quitting mid-typing.
fn handle_key_chat(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::ChatSubmit),
        InputKey::Backspace => Some(Message::ChatBackspace),
        InputKey::CharCtrl('u') => Some(Message::ChatClear),
        InputKey::Char(c) => Some(Message::ChatInput(c)),
        InputKey::Esc => Some(Message::FocusPrev),
        _ => None,
    }
}

/// Keys for the playground code buffer
fn handle_key_editor(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('r') => Some(Message::RunCode),
        InputKey::Enter => Some(Message::EditorNewline),
        InputKey::Backspace => Some(Message::EditorBackspace),
        InputKey::Char(c) => Some(Message::EditorInput(c)),
        InputKey::Esc => Some(Message::FocusPrev),
        _ => None,
    }
}
