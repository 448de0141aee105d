//! pypal-app - Application state and update logic for PythonPal
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the [`Message`] vocabulary, and the
//! pure [`handler::update`] function, plus configuration loading and OS
//! signal handling. It deliberately has no dependency on any terminal
//! library; keyboard input arrives as the abstract [`InputKey`].

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;
pub mod tips;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, EditorState, Focus, SettingsViewState, UiMode};
