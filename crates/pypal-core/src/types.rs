//! Core domain type definitions

use chrono::{DateTime, Local};

/// Application state enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Normal interactive operation
    #[default]
    Running,
    /// Application is shutting down
    Quitting,
}

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// Typed by the child at the chat prompt
    User,
    /// Produced by the tutor side of the conversation
    Assistant,
}

/// A single entry in the session transcript
///
/// The transcript is append-only and insertion-ordered; entries are never
/// reordered, edited, or deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Create a new chat message with the current timestamp
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    /// Format timestamp for display
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == ChatRole::Assistant
    }
}

/// A static tutor persona
///
/// Tutors are immutable and drawn from the fixed catalog; only the "selected"
/// pointer in application state changes. The avatar is a terminal glyph, used
/// to decorate assistant chat bubbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tutor {
    pub name: &'static str,
    pub avatar: &'static str,
    pub description: &'static str,
}

/// A badge with a one-way earned flag
///
/// Seeded with `earned = false` at startup. The flag is monotonic: once set it
/// never resets for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

/// A static coding exercise
///
/// `solution` and `completed` are deliberately inert: no control path compares
/// submitted code against the solution or sets the completed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub starter_code: &'static str,
    pub solution: &'static str,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_constructors() {
        let user = ChatMessage::user("hi");
        assert_eq!(user.role, ChatRole::User);
        assert_eq!(user.text, "hi");
        assert!(user.is_user());
        assert!(!user.is_assistant());

        let assistant = ChatMessage::assistant("hello!");
        assert_eq!(assistant.role, ChatRole::Assistant);
        assert!(assistant.is_assistant());
    }

    #[test]
    fn test_chat_message_formatted_time() {
        let msg = ChatMessage::user("hi");
        let time = msg.formatted_time();
        // HH:MM
        assert_eq!(time.len(), 5);
        assert_eq!(time.chars().nth(2), Some(':'));
    }

    #[test]
    fn test_app_phase_default_is_running() {
        assert_eq!(AppPhase::default(), AppPhase::Running);
    }
}
