//! Test fixtures and factory functions for creating test data.

use vocab_core::{normalize, VocabularyCatalog};

/// Chapter keys in document order. `chapter10` comes first on purpose.
pub const CHAPTERS: [&str; 6] = [
    "chapter10", "chapter1", "chapter2", "chapter3", "chapter4", "chapter5",
];

pub const WORDS_PER_CHAPTER: usize = 10;

/// Word at `index` of `chapter`, with a part-of-speech annotation.
pub fn word(chapter: &str, index: usize) -> String {
    format!("{chapter}-term{index} (n)")
}

pub fn definition(chapter: &str, index: usize) -> String {
    format!("definition {index} of {chapter}")
}

/// Catalog JSON with every chapter in `CHAPTERS` order.
///
/// Built by hand so key order does not depend on the JSON map type.
pub fn catalog_json() -> String {
    let chapters: Vec<String> = CHAPTERS
        .iter()
        .map(|chapter| {
            let entries: Vec<String> = (0..WORDS_PER_CHAPTER)
                .map(|i| {
                    format!(
                        "{}: {}",
                        serde_json::to_string(&word(chapter, i)).unwrap(),
                        serde_json::to_string(&definition(chapter, i)).unwrap()
                    )
                })
                .collect();
            format!("\"{chapter}\": {{{}}}", entries.join(", "))
        })
        .collect();
    format!("{{{}}}", chapters.join(", "))
}

pub fn catalog() -> VocabularyCatalog {
    VocabularyCatalog::from_json(&catalog_json()).unwrap()
}

/// The answer a learner should type for a prompt.
pub fn answer_for(prompt: &str) -> String {
    let catalog = catalog();
    catalog
        .chapters()
        .iter()
        .flat_map(|c| c.entries.iter())
        .find(|e| e.definition == prompt)
        .map(|e| normalize(&e.word))
        .unwrap_or_else(|| panic!("no word for prompt {prompt:?}"))
}
