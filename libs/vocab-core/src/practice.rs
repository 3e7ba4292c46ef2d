//! Practice list generation.
//!
//! Lists are shuffled with `SliceRandom::shuffle` (Fisher–Yates), so every
//! ordering is equally likely. Builders take the RNG as a parameter so
//! callers can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::catalog::VocabularyCatalog;
use crate::error::{Result, SessionError};
use crate::types::PracticeItem;

/// Default number of questions in exam mode.
pub const DEFAULT_EXAM_QUESTIONS: usize = 50;

/// Shuffled items from `[start, end)` of one chapter.
///
/// # Errors
///
/// Returns `SessionError::UnknownChapter` if the chapter is missing and
/// `SessionError::InvalidRange` if the range is empty or past the end.
pub fn build_range_list<R: Rng + ?Sized>(
    catalog: &VocabularyCatalog,
    chapter: &str,
    start: usize,
    end: usize,
    rng: &mut R,
) -> Result<Vec<PracticeItem>> {
    let entries = &catalog
        .chapter(chapter)
        .ok_or_else(|| SessionError::UnknownChapter(chapter.to_string()))?
        .entries;

    if start >= end || end > entries.len() {
        return Err(SessionError::InvalidRange {
            start,
            end,
            size: entries.len(),
        });
    }

    let mut items: Vec<PracticeItem> = entries[start..end].iter().map(PracticeItem::from).collect();
    items.shuffle(rng);
    Ok(items)
}

/// Questions drawn from one chapter for an exam list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterAllocation {
    pub chapter: String,
    pub allocated: usize,
    pub taken: usize,
}

impl ChapterAllocation {
    /// Questions this chapter could not supply.
    pub fn shortfall(&self) -> usize {
        self.allocated - self.taken
    }
}

/// How an exam list was assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamPlan {
    pub requested: usize,
    pub allocations: Vec<ChapterAllocation>,
}

impl ExamPlan {
    /// Questions actually selected.
    pub fn total(&self) -> usize {
        self.allocations.iter().map(|a| a.taken).sum()
    }

    pub fn shortfall(&self) -> usize {
        self.allocations.iter().map(ChapterAllocation::shortfall).sum()
    }
}

/// Spread `total_questions` over every chapter and sample each one.
///
/// Each chapter gets `total / chapters` questions and the first
/// `total % chapters` chapters (catalog order) get one more. A chapter
/// smaller than its allocation contributes all of its words; the list is
/// then shorter than requested.
pub fn build_exam_list<R: Rng + ?Sized>(
    catalog: &VocabularyCatalog,
    total_questions: usize,
    rng: &mut R,
) -> (Vec<PracticeItem>, ExamPlan) {
    let chapters = catalog.chapters();
    let mut plan = ExamPlan {
        requested: total_questions,
        allocations: Vec::with_capacity(chapters.len()),
    };
    if chapters.is_empty() {
        return (Vec::new(), plan);
    }

    let per_chapter = total_questions / chapters.len();
    let remainder = total_questions % chapters.len();

    let mut items = Vec::with_capacity(total_questions);
    for (idx, chapter) in chapters.iter().enumerate() {
        let allocated = per_chapter + usize::from(idx < remainder);

        let mut words: Vec<PracticeItem> = chapter.entries.iter().map(PracticeItem::from).collect();
        words.shuffle(rng);
        words.truncate(allocated);

        plan.allocations.push(ChapterAllocation {
            chapter: chapter.key.clone(),
            allocated,
            taken: words.len(),
        });
        items.extend(words);
    }

    items.shuffle(rng);
    (items, plan)
}
