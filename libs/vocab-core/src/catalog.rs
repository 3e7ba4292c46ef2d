//! Vocabulary catalog loaded from JSON.
//!
//! # Format
//! ```json
//! {
//!   "chapter1": { "cause (n)": "…", "dairy(adj)": "…" },
//!   "chapter2": { "breeding (…)": "…" }
//! }
//! ```
//!
//! Object order is significant: word positions drive range selection and
//! chapter order drives exam sampling, so the document order is kept.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::{chapter_number, ChapterSummary, VocabularyEntry};

/// An ordered chapter of vocabulary entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub key: String,
    pub entries: Vec<VocabularyEntry>,
}

impl Chapter {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definition of `word`, matched exactly as stored.
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.word == word)
            .map(|e| e.definition.as_str())
    }

    fn summary(&self) -> ChapterSummary {
        ChapterSummary {
            key: self.key.clone(),
            number: chapter_number(&self.key),
            word_count: self.len(),
        }
    }
}

/// Read-only mapping chapter → ordered word → definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyCatalog {
    chapters: Vec<Chapter>,
}

/// Matches from one chapter for a library search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterMatches {
    pub chapter: ChapterSummary,
    pub entries: Vec<VocabularyEntry>,
}

/// Position of a word inside its chapter, for range pickers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct IndexedWord {
    pub index: usize,
    pub word: String,
}

impl VocabularyCatalog {
    /// Build a catalog from `(chapter, [(word, definition)])` pairs.
    ///
    /// A word repeated within a chapter keeps its first position and the
    /// last definition.
    pub fn from_chapters<C, W, I, D>(chapters: C) -> Self
    where
        C: IntoIterator<Item = (W, I)>,
        W: Into<String>,
        I: IntoIterator<Item = (D, D)>,
        D: Into<String>,
    {
        let mut catalog = Self::default();
        for (key, words) in chapters {
            let entries = words
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()));
            catalog.insert_chapter(key.into(), entries);
        }
        catalog
    }

    /// Parse a catalog from JSON, preserving document order.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(content)?)
    }

    fn insert_chapter(&mut self, key: String, words: impl IntoIterator<Item = (String, String)>) {
        let mut entries: Vec<VocabularyEntry> = Vec::new();
        for (word, definition) in words {
            match entries.iter_mut().find(|e| e.word == word) {
                Some(existing) => existing.definition = definition,
                None => entries.push(VocabularyEntry { word, definition }),
            }
        }

        match self.chapters.iter_mut().find(|c| c.key == key) {
            Some(existing) => existing.entries = entries,
            None => self.chapters.push(Chapter { key, entries }),
        }
    }

    /// Chapters in catalog order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, key: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapter summaries ordered by chapter number.
    pub fn list_chapters(&self) -> Vec<ChapterSummary> {
        let mut summaries: Vec<_> = self.chapters.iter().map(Chapter::summary).collect();
        summaries.sort_by_key(|s| s.number);
        summaries
    }

    /// Definition of `word` in `chapter`.
    pub fn definition(&self, chapter: &str, word: &str) -> Option<&str> {
        self.chapter(chapter)?.definition(word)
    }

    /// First definition of `word` in any chapter, in catalog order.
    pub fn find_definition(&self, word: &str) -> Option<&str> {
        self.chapters.iter().find_map(|c| c.definition(word))
    }

    /// Entries whose word or definition contains `term`, case-insensitively.
    ///
    /// Chapters are ordered by number. With a non-empty term, chapters
    /// without matches are left out.
    pub fn search(&self, term: &str) -> Vec<ChapterMatches> {
        let needle = term.to_lowercase();
        let mut chapters: Vec<&Chapter> = self.chapters.iter().collect();
        chapters.sort_by_key(|c| chapter_number(&c.key));

        chapters
            .into_iter()
            .filter_map(|chapter| {
                let entries: Vec<VocabularyEntry> = chapter
                    .entries
                    .iter()
                    .filter(|e| {
                        e.word.to_lowercase().contains(&needle)
                            || e.definition.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect();

                if !needle.is_empty() && entries.is_empty() {
                    return None;
                }
                Some(ChapterMatches {
                    chapter: chapter.summary(),
                    entries,
                })
            })
            .collect()
    }

    /// Words of `chapter` containing `term`, with their positions.
    pub fn chapter_words(&self, chapter: &str, term: &str) -> Option<Vec<IndexedWord>> {
        let needle = term.to_lowercase();
        let chapter = self.chapter(chapter)?;
        Some(
            chapter
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.word.to_lowercase().contains(&needle))
                .map(|(index, e)| IndexedWord {
                    index,
                    word: e.word.clone(),
                })
                .collect(),
        )
    }
}

/// Ordered `(key, value)` pairs of a JSON object.
struct OrderedPairs<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedPairs<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor<V>(std::marker::PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
            type Value = OrderedPairs<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    pairs.push((key, value));
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor(std::marker::PhantomData))
    }
}

impl<'de> Deserialize<'de> for VocabularyCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OrderedPairs(chapters) = OrderedPairs::<OrderedPairs<String>>::deserialize(deserializer)?;
        Ok(Self::from_chapters(
            chapters.into_iter().map(|(key, OrderedPairs(words))| (key, words)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> VocabularyCatalog {
        VocabularyCatalog::from_json(
            r#"{
                "chapter10": {"zygote (n)": "ပဋိသန္ဓေ", "allele": "ဗီဇ"},
                "chapter2": {"cause (n)": "အကြောင်းရင်း", "dairy(adj)": "နို့ထွက်", "Blur (v)": "မှုန်ဝါး"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parse_preserves_document_order() {
        let catalog = sample();
        let keys: Vec<_> = catalog.chapters().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["chapter10", "chapter2"]);

        let words: Vec<_> = catalog.chapter("chapter2").unwrap().entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["cause (n)", "dairy(adj)", "Blur (v)"]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(VocabularyCatalog::from_json("").unwrap().is_empty());
        assert!(VocabularyCatalog::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn reject_non_object() {
        assert!(matches!(VocabularyCatalog::from_json("[1, 2]"), Err(CatalogError::Json(_))));
        assert!(VocabularyCatalog::from_json(r#"{"chapter1": {"a": 1}}"#).is_err());
    }

    #[test]
    fn duplicate_word_keeps_position_and_last_definition() {
        let catalog = VocabularyCatalog::from_chapters(vec![(
            "chapter1",
            vec![("a", "1"), ("b", "2"), ("a", "3")],
        )]);
        let chapter = catalog.chapter("chapter1").unwrap();
        assert_eq!(chapter.len(), 2);
        assert_eq!(chapter.entries[0].definition, "3");
    }

    #[test]
    fn list_chapters_sorted_by_number() {
        let summaries = sample().list_chapters();
        assert_eq!(
            summaries,
            vec![
                ChapterSummary { key: "chapter2".into(), number: 2, word_count: 3 },
                ChapterSummary { key: "chapter10".into(), number: 10, word_count: 2 },
            ]
        );
    }

    #[test]
    fn definitions_lookup() {
        let catalog = sample();
        assert_eq!(catalog.definition("chapter2", "dairy(adj)"), Some("နို့ထွက်"));
        assert_eq!(catalog.definition("chapter10", "dairy(adj)"), None);
        assert_eq!(catalog.find_definition("allele"), Some("ဗီဇ"));
        assert_eq!(catalog.find_definition("missing"), None);
    }

    #[test]
    fn search_matches_word_or_definition() {
        let catalog = sample();

        let results = catalog.search("BLUR");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chapter.key, "chapter2");
        assert_eq!(results[0].entries[0].word, "Blur (v)");

        let results = catalog.search("ဗီဇ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entries[0].word, "allele");

        assert!(catalog.search("nothing-like-this").is_empty());
    }

    #[test]
    fn empty_search_returns_everything() {
        let results = sample().search("");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].entries.len(), 3);
        assert_eq!(results[1].entries.len(), 2);
    }

    #[test]
    fn chapter_words_keep_positions() {
        let catalog = sample();
        let words = catalog.chapter_words("chapter2", "a").unwrap();
        assert_eq!(
            words,
            vec![
                IndexedWord { index: 0, word: "cause (n)".into() },
                IndexedWord { index: 1, word: "dairy(adj)".into() },
            ]
        );
        assert!(catalog.chapter_words("chapter99", "").is_none());
    }
}
