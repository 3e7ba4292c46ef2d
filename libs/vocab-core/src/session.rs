//! Practice session state machine.
//!
//! A session starts with its list already built (`ListBuilt`), moves to
//! `InProgress` on the first resolution and ends in `Completed` once every
//! item is resolved. An incorrect answer parks the session in
//! `AwaitingContinue` until the learner acknowledges the feedback; correct
//! answers and skips advance immediately.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};
use crate::matching::{compare_answers, normalize};
use crate::types::{AnswerOutcome, AnswerRecord, PracticeItem, SessionRecord, SessionSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    ListBuilt,
    InProgress,
    AwaitingContinue,
    Completed,
}

/// Feedback shown after an incorrect answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub user_answer: String,
    pub expected: String,
}

/// Result of submitting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub outcome: AnswerOutcome,
    pub advanced: bool,
}

/// One practice run over a built list.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    source: SessionSource,
    items: Vec<PracticeItem>,
    current_index: usize,
    score: u32,
    answers: Vec<AnswerRecord>,
    phase: SessionPhase,
    feedback: Option<Feedback>,
}

impl PracticeSession {
    /// Start a session over an already shuffled list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` if `items` is empty.
    pub fn new(source: SessionSource, items: Vec<PracticeItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(SessionError::EmptySession);
        }
        Ok(Self {
            source,
            answers: Vec::with_capacity(items.len()),
            items,
            current_index: 0,
            score: 0,
            phase: SessionPhase::ListBuilt,
            feedback: None,
        })
    }

    pub fn source(&self) -> &SessionSource {
        &self.source
    }

    pub fn items(&self) -> &[PracticeItem] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// Item currently being asked, `None` once completed.
    pub fn current_item(&self) -> Option<&PracticeItem> {
        self.items.get(self.current_index)
    }

    fn ensure_answerable(&self) -> Result<&PracticeItem> {
        match self.phase {
            SessionPhase::Completed => Err(SessionError::SessionCompleted),
            SessionPhase::AwaitingContinue => Err(SessionError::AwaitingContinue),
            SessionPhase::ListBuilt | SessionPhase::InProgress => {
                self.current_item().ok_or(SessionError::SessionCompleted)
            }
        }
    }

    /// Judge `user_answer` against the current item.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AwaitingContinue` while feedback is pending and
    /// `SessionError::SessionCompleted` after the last item.
    pub fn submit_answer(&mut self, user_answer: &str) -> Result<SubmitOutcome> {
        let word = self.ensure_answerable()?.word.clone();
        let result = compare_answers(user_answer, &word);

        if result.is_correct {
            self.answers.push(AnswerRecord::correct(word));
            self.score += 1;
            self.advance();
            Ok(SubmitOutcome {
                outcome: AnswerOutcome::Correct,
                advanced: true,
            })
        } else {
            self.answers.push(AnswerRecord::incorrect(word, user_answer));
            self.phase = SessionPhase::AwaitingContinue;
            self.feedback = Some(Feedback {
                user_answer: user_answer.to_string(),
                expected: result.correct_normalized,
            });
            Ok(SubmitOutcome {
                outcome: AnswerOutcome::Incorrect,
                advanced: false,
            })
        }
    }

    /// Skip the current item.
    ///
    /// # Errors
    ///
    /// Same as [`PracticeSession::submit_answer`].
    pub fn skip(&mut self) -> Result<()> {
        let word = self.ensure_answerable()?.word.clone();
        self.answers.push(AnswerRecord::skipped(word));
        self.advance();
        Ok(())
    }

    /// Acknowledge incorrect-answer feedback and move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NothingToContinue` when no feedback is pending.
    pub fn continue_after_feedback(&mut self) -> Result<()> {
        if self.phase != SessionPhase::AwaitingContinue {
            return Err(SessionError::NothingToContinue);
        }
        self.feedback = None;
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.current_index += 1;
        self.phase = if self.current_index >= self.items.len() {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        };
    }

    /// Build the history record of a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::IncompleteSession` unless every item has been
    /// resolved exactly once.
    pub fn finalize(&self, date: impl Into<String>) -> Result<SessionRecord> {
        let total = self.items.len();
        if !self.is_complete() || self.answers.len() != total {
            return Err(SessionError::IncompleteSession {
                answered: self.answers.len(),
                total,
            });
        }

        let (start_index, end_index) = match &self.source {
            SessionSource::Chapter { start, end, .. } => (*start, *end),
            SessionSource::Exam { .. } => (0, total),
        };

        Ok(SessionRecord {
            chapter: self.source.chapter_key().to_string(),
            start_index,
            end_index,
            score: self.score,
            total,
            date: date.into(),
            answers: self.answers.clone(),
        })
    }
}

/// Display form of the expected answer.
pub fn display_answer(word: &str) -> String {
    normalize(word)
}
