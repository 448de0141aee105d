//! Chat transcript handlers

use pypal_core::{catalog, ChatMessage};
use tracing::debug;

use crate::state::AppState;

use super::UpdateResult;

/// Type a character into the chat input
pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.chat_input.push(c);
    UpdateResult::none()
}

/// Delete the last character of the chat input
pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.chat_input.pop();
    UpdateResult::none()
}

/// Clear the chat input
pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.chat_input.clear();
    UpdateResult::none()
}

/// Submit the chat input
///
/// Empty-after-trim input is a silent no-op: nothing is appended and the
/// input buffer is left alone. Otherwise the user message and the canned
/// assistant reply are appended in order and the input is cleared.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let text = state.chat_input.trim();
    if text.is_empty() {
        return UpdateResult::none();
    }

    debug!("Chat submit ({} chars)", text.len());
    state.transcript.push(ChatMessage::user(text));
    state
        .transcript
        .push(ChatMessage::assistant(catalog::PLACEHOLDER_REPLY));
    state.chat_input.clear();

    UpdateResult::none()
}
