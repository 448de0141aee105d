//! Settings modal handlers
//!
//! The API key is held in plain local state for the session. Save and cancel
//! both just close the modal; the key is never written to disk or validated
//! anywhere. This is the seam where a credential store would plug in.

use tracing::debug;

use crate::state::AppState;

use super::UpdateResult;

/// Type a character into the API key field
pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.settings_view_state.push_char(c);
    UpdateResult::none()
}

/// Delete the last character of the API key field
pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.settings_view_state.backspace();
    UpdateResult::none()
}

/// Clear the API key field
pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.settings_view_state.clear();
    UpdateResult::none()
}

/// Close the modal, keeping the buffer for the session
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    debug!(
        "Settings saved (api key: {} chars, in-memory only)",
        state.settings_view_state.api_key.len()
    );
    state.hide_settings();
    UpdateResult::none()
}

/// Close the modal without saving (the buffer also survives, by contract)
pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    state.hide_settings();
    UpdateResult::none()
}
