//! Catalog browsing commands.

use super::CommandError;
use crate::state::AppState;
use vocab_core::{ChapterMatches, ChapterSummary, IndexedWord};

/// List chapters ordered by chapter number.
pub fn list_chapters(state: &AppState) -> Result<Vec<ChapterSummary>, CommandError> {
    Ok(state.controller()?.list_chapters())
}

/// Search words and definitions across the library.
pub fn search_library(term: String, state: &AppState) -> Result<Vec<ChapterMatches>, CommandError> {
    Ok(state.controller()?.search_library(term.trim()))
}

/// Words of one chapter with their positions, for picking a range.
pub fn chapter_words(
    chapter: String,
    filter: String,
    state: &AppState,
) -> Result<Vec<IndexedWord>, CommandError> {
    state
        .controller()?
        .chapter_words(&chapter, filter.trim())
        .map_err(Into::into)
}
