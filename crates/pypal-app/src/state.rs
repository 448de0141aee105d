//! Application state (Model in TEA pattern)

use pypal_core::{catalog, Achievement, AppPhase, Challenge, ChatMessage, Tutor};
use tracing::{info, warn};

use crate::config::Settings;
use crate::tips;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal TUI with boards, chat, and optional playground
    #[default]
    Normal,

    /// Settings modal (API key entry) overlaid on the normal view
    Settings,
}

/// Which interactive region receives list navigation and text input
///
/// The achievement board is display-only and never takes focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Tutor roster (up/down + enter selects the active persona)
    #[default]
    Tutors,

    /// Challenge board (up/down + enter starts a challenge)
    Challenges,

    /// Chat input line (printable chars type, enter submits)
    Chat,

    /// Playground code buffer (printable chars type, Ctrl+R runs)
    ///
    /// Only reachable while the playground is open.
    Playground,
}

/// The playground's mutable code buffer
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Current source text
    pub code: String,
}

impl EditorState {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Append a character at the end of the buffer
    pub fn push_char(&mut self, c: char) {
        self.code.push(c);
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) {
        self.code.pop();
    }

    /// Append a line break
    pub fn newline(&mut self) {
        self.code.push('\n');
    }

    /// Replace the buffer wholesale (challenge selection)
    pub fn replace(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Number of lines in the buffer
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}

/// State for the settings modal
///
/// The API key lives here in plain local state for the whole session. It is
/// never persisted or validated; save and cancel both just close the modal.
#[derive(Debug, Clone, Default)]
pub struct SettingsViewState {
    /// API key edit buffer
    pub api_key: String,
}

impl SettingsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        self.api_key.push(c);
    }

    pub fn backspace(&mut self) {
        self.api_key.pop();
    }

    pub fn clear(&mut self) {
        self.api_key.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Current application phase (used for quitting)
    pub phase: AppPhase,

    /// Which region receives navigation/text input
    pub focus: Focus,

    /// Application settings from config file
    pub settings: Settings,

    /// The fixed tutor roster
    pub tutors: &'static [Tutor],

    /// Index of the active tutor (invariant: always a valid roster index)
    pub selected_tutor: usize,

    /// Highlight position within the tutor roster
    pub tutor_cursor: usize,

    /// Achievement board (earned flags flip one-way)
    pub achievements: Vec<Achievement>,

    /// Challenge board (static; `completed` never changes)
    pub challenges: Vec<Challenge>,

    /// Highlight position within the challenge board
    pub challenge_cursor: usize,

    /// Append-only session transcript
    pub transcript: Vec<ChatMessage>,

    /// Chat input line buffer
    pub chat_input: String,

    /// Playground code buffer
    pub editor: EditorState,

    /// Playground visibility flag (independent of settings modal)
    pub playground_open: bool,

    /// Settings modal state (API key buffer survives close/reopen)
    pub settings_view_state: SettingsViewState,

    /// Tip line shown in the status bar, chosen at startup
    pub tip: &'static str,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState, applying startup configuration
    pub fn with_settings(settings: Settings) -> Self {
        let selected_tutor = match settings.ui.default_tutor.as_deref() {
            Some(name) => catalog::tutor_index_by_name(name).unwrap_or_else(|| {
                warn!("Unknown tutor '{}' in config, using default", name);
                0
            }),
            None => 0,
        };

        Self {
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            focus: Focus::Tutors,
            tutors: catalog::TUTORS,
            selected_tutor,
            tutor_cursor: selected_tutor,
            achievements: catalog::achievements(),
            challenges: catalog::challenges(),
            challenge_cursor: 0,
            transcript: Vec::new(),
            chat_input: String::new(),
            editor: EditorState::new(settings.editor.starter_code.clone()),
            playground_open: settings.behavior.playground_on_start,
            settings_view_state: SettingsViewState::new(),
            tip: tips::pick(),
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Tutor Selection
    // ─────────────────────────────────────────────────────────

    /// The currently active tutor
    pub fn active_tutor(&self) -> &Tutor {
        &self.tutors[self.selected_tutor]
    }

    /// Make the tutor at `index` the active persona
    ///
    /// Out-of-range indices are ignored; choices are drawn from the same
    /// roster that is rendered, so this cannot happen through the UI.
    pub fn select_tutor(&mut self, index: usize) {
        if index < self.tutors.len() {
            self.selected_tutor = index;
            info!("Tutor selected: {}", self.tutors[index].name);
        }
    }

    /// Move the tutor highlight up one row (wraps)
    pub fn tutor_cursor_up(&mut self) {
        self.tutor_cursor = if self.tutor_cursor == 0 {
            self.tutors.len() - 1
        } else {
            self.tutor_cursor - 1
        };
    }

    /// Move the tutor highlight down one row (wraps)
    pub fn tutor_cursor_down(&mut self) {
        self.tutor_cursor = (self.tutor_cursor + 1) % self.tutors.len();
    }

    // ─────────────────────────────────────────────────────────
    // Achievement Board
    // ─────────────────────────────────────────────────────────

    /// Mark an achievement as earned
    ///
    /// Idempotent and one-way: already-earned badges are left untouched.
    /// Returns `true` only when the flag actually flipped.
    pub fn mark_earned(&mut self, id: u32) -> bool {
        match self.achievements.iter_mut().find(|a| a.id == id) {
            Some(achievement) if !achievement.earned => {
                achievement.earned = true;
                info!("Achievement unlocked: {}", achievement.title);
                true
            }
            _ => false,
        }
    }

    /// Number of earned badges
    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.earned).count()
    }

    // ─────────────────────────────────────────────────────────
    // Challenge Board
    // ─────────────────────────────────────────────────────────

    /// Move the challenge highlight up one row (wraps)
    pub fn challenge_cursor_up(&mut self) {
        self.challenge_cursor = if self.challenge_cursor == 0 {
            self.challenges.len() - 1
        } else {
            self.challenge_cursor - 1
        };
    }

    /// Move the challenge highlight down one row (wraps)
    pub fn challenge_cursor_down(&mut self) {
        self.challenge_cursor = (self.challenge_cursor + 1) % self.challenges.len();
    }

    /// Load a challenge into the playground
    ///
    /// Replaces the code buffer with the challenge's starter code and forces
    /// the playground open, regardless of its prior visibility.
    pub fn start_challenge(&mut self, index: usize) {
        if let Some(challenge) = self.challenges.get(index) {
            info!("Challenge started: {}", challenge.title);
            self.editor.replace(challenge.starter_code);
            self.playground_open = true;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Panel Visibility
    // ─────────────────────────────────────────────────────────

    /// Toggle playground visibility
    ///
    /// If the playground closes while focused, focus falls back to the chat
    /// input so the focus invariant (never on a hidden region) holds.
    pub fn toggle_playground(&mut self) {
        self.playground_open = !self.playground_open;
        if !self.playground_open && self.focus == Focus::Playground {
            self.focus = Focus::Chat;
        }
    }

    /// Open the settings modal
    pub fn show_settings(&mut self) {
        self.ui_mode = UiMode::Settings;
    }

    /// Close the settings modal
    pub fn hide_settings(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // ─────────────────────────────────────────────────────────
    // Focus Cycling
    // ─────────────────────────────────────────────────────────

    /// Move focus to the next region (skips the playground while closed)
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Tutors => Focus::Challenges,
            Focus::Challenges => Focus::Chat,
            Focus::Chat if self.playground_open => Focus::Playground,
            Focus::Chat => Focus::Tutors,
            Focus::Playground => Focus::Tutors,
        };
    }

    /// Move focus to the previous region (skips the playground while closed)
    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Tutors if self.playground_open => Focus::Playground,
            Focus::Tutors => Focus::Chat,
            Focus::Challenges => Focus::Tutors,
            Focus::Chat => Focus::Challenges,
            Focus::Playground => Focus::Chat,
        };
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Request application quit
    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
