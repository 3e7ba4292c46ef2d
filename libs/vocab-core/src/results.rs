//! Score summaries for finished sessions.

use serde::{Deserialize, Serialize};

use crate::catalog::VocabularyCatalog;
use crate::session::display_answer;
use crate::types::{AnswerOutcome, AnswerRecord, SessionRecord};

/// Rounded percentage of `score` over `total`, 0 for an empty session.
pub fn percentage(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(score) / total as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Perfect,
    Excellent,
    Good,
    NeedsPractice,
    KeepLearning,
}

impl PerformanceLevel {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 100 {
            Self::Perfect
        } else if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Good
        } else if percentage >= 40 {
            Self::NeedsPractice
        } else {
            Self::KeepLearning
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect!",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsPractice => "Needs Practice",
            Self::KeepLearning => "Keep Learning",
        }
    }
}

/// Results screen for a session that just finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeResults {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
    pub level: PerformanceLevel,
    pub incorrect: Vec<AnswerRecord>,
    pub skipped: Vec<AnswerRecord>,
}

impl PracticeResults {
    pub fn from_record(record: &SessionRecord) -> Self {
        let percentage = percentage(record.score, record.total);
        Self {
            score: record.score,
            total: record.total,
            percentage,
            level: PerformanceLevel::from_percentage(percentage),
            incorrect: filter_outcome(&record.answers, AnswerOutcome::Incorrect),
            skipped: filter_outcome(&record.answers, AnswerOutcome::Skipped),
        }
    }
}

fn filter_outcome(answers: &[AnswerRecord], outcome: AnswerOutcome) -> Vec<AnswerRecord> {
    answers
        .iter()
        .filter(|a| a.outcome() == outcome)
        .cloned()
        .collect()
}

/// A missed word in a past session, with its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub word: String,
    pub expected: String,
    pub definition: Option<String>,
    pub outcome: AnswerOutcome,
    pub user_answer: Option<String>,
}

/// Breakdown of a stored session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    pub record: SessionRecord,
    pub percentage: u32,
    pub level: PerformanceLevel,
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub skipped_count: usize,
    pub review: Vec<ReviewItem>,
}

impl SessionDetail {
    /// Build the detail view, looking definitions up in `catalog`.
    ///
    /// Exam sessions span chapters, so their words are looked up across the
    /// whole catalog.
    pub fn build(record: &SessionRecord, catalog: &VocabularyCatalog) -> Self {
        let count = |outcome| record.answers.iter().filter(|a| a.outcome() == outcome).count();

        let review = record
            .answers
            .iter()
            .filter(|a| a.outcome() != AnswerOutcome::Correct)
            .map(|answer| {
                let definition = if record.is_exam() {
                    catalog.find_definition(&answer.word)
                } else {
                    catalog.definition(&record.chapter, &answer.word)
                };
                ReviewItem {
                    word: answer.word.clone(),
                    expected: display_answer(&answer.word),
                    definition: definition.map(str::to_string),
                    outcome: answer.outcome(),
                    user_answer: answer.user_answer.clone(),
                }
            })
            .collect();

        let percentage = percentage(record.score, record.total);
        Self {
            record: record.clone(),
            percentage,
            level: PerformanceLevel::from_percentage(percentage),
            correct_count: count(AnswerOutcome::Correct),
            incorrect_count: count(AnswerOutcome::Incorrect),
            skipped_count: count(AnswerOutcome::Skipped),
            review,
        }
    }
}
