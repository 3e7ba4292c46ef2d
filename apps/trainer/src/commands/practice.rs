//! Practice session commands.

use super::CommandError;
use crate::controller::{AnswerResponse, PracticeState};
use crate::state::AppState;

/// Start a session over words `[start, end)` of a chapter.
pub fn start_chapter_session(
    chapter: String,
    start: usize,
    end: usize,
    state: &AppState,
) -> Result<PracticeState, CommandError> {
    state
        .controller()?
        .start_chapter_session(&chapter, start, end)
        .map_err(Into::into)
}

/// Start an exam drawn from every chapter.
pub fn start_exam_session(state: &AppState) -> Result<PracticeState, CommandError> {
    state.controller()?.start_exam_session().map_err(Into::into)
}

pub fn submit_answer(answer: String, state: &AppState) -> Result<AnswerResponse, CommandError> {
    state.controller()?.submit_answer(&answer).map_err(Into::into)
}

pub fn skip(state: &AppState) -> Result<PracticeState, CommandError> {
    state.controller()?.skip().map_err(Into::into)
}

pub fn continue_after_feedback(state: &AppState) -> Result<PracticeState, CommandError> {
    state
        .controller()?
        .continue_after_feedback()
        .map_err(Into::into)
}

pub fn abandon_session(state: &AppState) -> Result<PracticeState, CommandError> {
    Ok(state.controller()?.abandon_session())
}

pub fn current_state(state: &AppState) -> Result<PracticeState, CommandError> {
    Ok(state.controller()?.current_state())
}
