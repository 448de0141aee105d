//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Focus Navigation
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next interactive region
    FocusNext,
    /// Move focus to the previous interactive region
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Tutor Selector Messages
    // ─────────────────────────────────────────────────────────
    /// Move the tutor highlight up one row
    TutorCursorUp,
    /// Move the tutor highlight down one row
    TutorCursorDown,
    /// Make the tutor at the given roster index the active persona
    SelectTutor(usize),

    // ─────────────────────────────────────────────────────────
    // Challenge Board Messages
    // ─────────────────────────────────────────────────────────
    /// Move the challenge highlight up one row
    ChallengeCursorUp,
    /// Move the challenge highlight down one row
    ChallengeCursorDown,
    /// Load the challenge's starter code and open the playground
    StartChallenge(usize),

    // ─────────────────────────────────────────────────────────
    // Chat Messages
    // ─────────────────────────────────────────────────────────
    /// Character typed into the chat input
    ChatInput(char),
    /// Backspace in the chat input
    ChatBackspace,
    /// Clear the chat input (Ctrl+U)
    ChatClear,
    /// Submit the chat input
    ChatSubmit,

    // ─────────────────────────────────────────────────────────
    // Playground Messages
    // ─────────────────────────────────────────────────────────
    /// Character typed into the code buffer
    EditorInput(char),
    /// Backspace in the code buffer
    EditorBackspace,
    /// Newline in the code buffer
    EditorNewline,
    /// Run the current code buffer (placeholder: no execution happens)
    RunCode,
    /// Toggle playground visibility
    TogglePlayground,

    // ─────────────────────────────────────────────────────────
    // Settings Messages
    // ─────────────────────────────────────────────────────────
    /// Open the settings modal
    ShowSettings,
    /// Character typed into the API key field
    SettingsInput(char),
    /// Backspace in the API key field
    SettingsBackspace,
    /// Clear the API key field (Ctrl+U)
    SettingsClear,
    /// Save and close the settings modal (nothing is persisted)
    SettingsSave,
    /// Close the settings modal without saving
    SettingsCancel,
}
