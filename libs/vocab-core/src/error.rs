//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised while building or driving a practice session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown chapter: {0}")]
    UnknownChapter(String),

    #[error("invalid range {start}..{end} for chapter of {size} words")]
    InvalidRange { start: usize, end: usize, size: usize },

    #[error("no words available for session")]
    EmptySession,

    #[error("feedback must be acknowledged before answering again")]
    AwaitingContinue,

    #[error("no feedback is pending")]
    NothingToContinue,

    #[error("session already completed")]
    SessionCompleted,

    #[error("session incomplete: {answered} of {total} answered")]
    IncompleteSession { answered: usize, total: usize },
}

/// Errors that can occur while loading a vocabulary catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
}
