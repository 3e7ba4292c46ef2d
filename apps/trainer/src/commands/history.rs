//! Session history commands.

use super::CommandError;
use crate::state::AppState;
use vocab_core::{SessionDetail, SessionRecord};

/// All finished sessions, most recent first.
pub fn get_history(state: &AppState) -> Result<Vec<SessionRecord>, CommandError> {
    Ok(state.controller()?.history().to_vec())
}

pub fn get_recent_sessions(state: &AppState) -> Result<Vec<SessionRecord>, CommandError> {
    Ok(state.controller()?.recent_sessions().to_vec())
}

/// Detail for the session at `index` in the history list.
pub fn get_session_detail(index: usize, state: &AppState) -> Result<SessionDetail, CommandError> {
    state
        .controller()?
        .session_detail(index)
        .map_err(Into::into)
}
