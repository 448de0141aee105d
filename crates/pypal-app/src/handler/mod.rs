//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and focus regions
//! - `chat`: Chat transcript handlers
//! - `playground`: Challenge selection and run-code handlers
//! - `settings_handlers`: Settings modal handlers

pub(crate) mod chat;
pub(crate) mod keys;
pub(crate) mod playground;
pub(crate) mod settings_handlers;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
