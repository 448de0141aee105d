//! Challenge selection and run-code handlers

use pypal_core::catalog::FIRST_CODE_ACHIEVEMENT;
use tracing::info;

use crate::state::AppState;

use super::UpdateResult;

/// Load a challenge's starter code and force the playground open
pub fn handle_start_challenge(state: &mut AppState, index: usize) -> UpdateResult {
    state.start_challenge(index);
    UpdateResult::none()
}

/// Run the current code buffer
///
/// No execution happens; this is the boundary where a sandboxed interpreter
/// would be called with `(language, source)` and report
/// `(stdout, stderr, exit status)`. Today the only observable effect is the
/// first-code achievement flipping, which is idempotent.
pub fn handle_run(state: &mut AppState) -> UpdateResult {
    info!("Running code ({} bytes)", state.editor.code.len());
    state.mark_earned(FIRST_CODE_ACHIEVEMENT);
    UpdateResult::none()
}
