//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// Chapter key used for sessions sampled across the whole catalog.
pub const EXAM_MODE_CHAPTER: &str = "exam-mode";

/// A single word/definition pair from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub definition: String,
}

/// Snapshot of a catalog entry drawn for one practice session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PracticeItem {
    pub word: String,
    pub definition: String,
}

impl From<&VocabularyEntry> for PracticeItem {
    fn from(entry: &VocabularyEntry) -> Self {
        Self {
            word: entry.word.clone(),
            definition: entry.definition.clone(),
        }
    }
}

/// How a single practice item was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    Skipped,
}

/// Record of one resolved practice item.
///
/// Serialized in the flat shape kept in the history snapshot:
/// `{"word", "correct", "userAnswer"?, "skipped"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub word: String,
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
}

impl AnswerRecord {
    pub fn correct(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            correct: true,
            user_answer: None,
            skipped: None,
        }
    }

    pub fn incorrect(word: impl Into<String>, user_answer: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            correct: false,
            user_answer: Some(user_answer.into()),
            skipped: None,
        }
    }

    pub fn skipped(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            correct: false,
            user_answer: None,
            skipped: Some(true),
        }
    }

    /// Outcome of this record. `correct` wins over the other flags.
    pub fn outcome(&self) -> AnswerOutcome {
        if self.correct {
            AnswerOutcome::Correct
        } else if self.is_skipped() {
            AnswerOutcome::Skipped
        } else {
            AnswerOutcome::Incorrect
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.unwrap_or(false)
    }
}

/// A finished practice session as stored in history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub chapter: String,
    pub start_index: usize,
    pub end_index: usize,
    pub score: u32,
    pub total: usize,
    pub date: String,
    pub answers: Vec<AnswerRecord>,
}

impl SessionRecord {
    pub fn is_exam(&self) -> bool {
        self.chapter == EXAM_MODE_CHAPTER
    }
}

/// Where a practice list came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionSource {
    /// A contiguous `[start, end)` range of one chapter.
    Chapter {
        chapter: String,
        start: usize,
        end: usize,
    },
    /// A sample across every chapter.
    ///
    /// The finished record stores `startIndex` 0 and `endIndex` equal to the
    /// number of questions actually asked, which is less than `requested`
    /// when chapters are too small. Older histories may hold `requested`
    /// as `endIndex` instead.
    Exam { requested: usize },
}

impl SessionSource {
    /// Chapter key recorded in history.
    pub fn chapter_key(&self) -> &str {
        match self {
            Self::Chapter { chapter, .. } => chapter,
            Self::Exam { .. } => EXAM_MODE_CHAPTER,
        }
    }
}

/// Chapter listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterSummary {
    pub key: String,
    pub number: u32,
    pub word_count: usize,
}

/// Extract the chapter number from a key such as `"chapter12"`.
///
/// Returns the first run of ASCII digits, or 0 when there is none.
pub fn chapter_number(key: &str) -> u32 {
    let digits: String = key
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Human label for a chapter key.
pub fn chapter_label(key: &str) -> String {
    if key == EXAM_MODE_CHAPTER {
        "Exam Ready Mode".to_string()
    } else {
        format!("Chapter {}", chapter_number(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn answer_record_serializes_flat() {
        let json = serde_json::to_string(&AnswerRecord::correct("cell")).unwrap();
        assert_eq!(json, r#"{"word":"cell","correct":true}"#);

        let json = serde_json::to_string(&AnswerRecord::incorrect("cell", "sell")).unwrap();
        assert_eq!(json, r#"{"word":"cell","correct":false,"userAnswer":"sell"}"#);

        let json = serde_json::to_string(&AnswerRecord::skipped("cell")).unwrap();
        assert_eq!(json, r#"{"word":"cell","correct":false,"skipped":true}"#);
    }

    #[test]
    fn answer_outcome() {
        assert_eq!(AnswerRecord::correct("a").outcome(), AnswerOutcome::Correct);
        assert_eq!(AnswerRecord::incorrect("a", "b").outcome(), AnswerOutcome::Incorrect);
        assert_eq!(AnswerRecord::skipped("a").outcome(), AnswerOutcome::Skipped);
    }

    #[test]
    fn session_record_reads_camel_case() {
        let json = r#"{
            "chapter": "chapter3",
            "startIndex": 0,
            "endIndex": 2,
            "score": 1,
            "total": 2,
            "date": "1/2/2025",
            "answers": [
                {"word": "a", "correct": true},
                {"word": "b", "correct": false, "userAnswer": "c"}
            ]
        }"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.end_index, 2);
        assert_eq!(record.answers[1].user_answer.as_deref(), Some("c"));
        assert!(!record.is_exam());
    }

    #[test]
    fn chapter_numbers() {
        assert_eq!(chapter_number("chapter12"), 12);
        assert_eq!(chapter_number("ch3_part2"), 3);
        assert_eq!(chapter_number("appendix"), 0);
        assert_eq!(chapter_label("chapter7"), "Chapter 7");
        assert_eq!(chapter_label(EXAM_MODE_CHAPTER), "Exam Ready Mode");
    }
}
