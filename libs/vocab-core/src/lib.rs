//! Core vocabulary trainer library.
//!
//! Provides:
//! - Answer normalization and matching (parenthetical annotations stripped)
//! - Ordered vocabulary catalog loaded from JSON
//! - Practice list generation (chapter ranges and exam sampling)
//! - Practice session state machine and history records
//! - Score summaries for results and history views

pub mod catalog;
pub mod error;
pub mod matching;
pub mod practice;
pub mod results;
pub mod session;
pub mod types;

pub use catalog::{Chapter, ChapterMatches, IndexedWord, VocabularyCatalog};
pub use error::{CatalogError, Result, SessionError};
pub use matching::{answers_match, compare_answers, normalize, strip_annotations, MatchResult};
pub use practice::{build_exam_list, build_range_list, ExamPlan, DEFAULT_EXAM_QUESTIONS};
pub use results::{percentage, PerformanceLevel, PracticeResults, ReviewItem, SessionDetail};
pub use session::{Feedback, PracticeSession, SessionPhase, SubmitOutcome};
pub use types::{
    chapter_label, chapter_number, AnswerOutcome, AnswerRecord, ChapterSummary, PracticeItem,
    SessionRecord, SessionSource, VocabularyEntry, EXAM_MODE_CHAPTER,
};
