//! Commands exposed to the presentation layer.
//!
//! Each command locks the controller once, so commands from different
//! threads are serialized.

pub mod chapters;
pub mod history;
pub mod practice;

pub use chapters::{chapter_words, list_chapters, search_library};
pub use history::{get_history, get_recent_sessions, get_session_detail};
pub use practice::{
    abandon_session, continue_after_feedback, current_state, skip, start_chapter_session,
    start_exam_session, submit_answer,
};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::controller::ControllerError> for CommandError {
    fn from(e: crate::controller::ControllerError) -> Self {
        Self { message: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerError;
    use vocab_core::SessionError;

    #[test]
    fn controller_errors_keep_their_message() {
        let err = CommandError::from(ControllerError::Session(SessionError::InvalidRange {
            start: 4,
            end: 2,
            size: 10,
        }));
        assert_eq!(err.message, "invalid range 4..2 for chapter of 10 words");

        let err = CommandError::from(ControllerError::SessionNotFound(3));
        assert_eq!(err.to_string(), "session not found: 3");
    }
}
