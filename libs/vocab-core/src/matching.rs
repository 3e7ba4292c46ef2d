//! Answer normalization and matching for typed answers.
//!
//! Vocabulary keys carry noise that learners are not expected to type:
//! part-of-speech tags (`"cause (n)"`), glosses in a second script
//! (`"breeding (သားဖောက်ရန်အတွက်)"`) and uneven spacing. Both sides of a
//! comparison go through [`normalize`] before being compared.

use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to the expected word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized expected word (for display).
    pub correct_normalized: String,
}

/// Compare a typed answer to the expected vocabulary word.
///
/// The typed answer is trimmed before normalization. The expected word is
/// taken as stored in the catalog; normalization trims it anyway.
pub fn compare_answers(typed: &str, expected: &str) -> MatchResult {
    let typed_normalized = normalize(typed.trim());
    let correct_normalized = normalize(expected);

    MatchResult {
        is_correct: typed_normalized == correct_normalized,
        typed_normalized,
        correct_normalized,
    }
}

/// Returns true when `typed` matches `expected` after normalization.
pub fn answers_match(typed: &str, expected: &str) -> bool {
    compare_answers(typed, expected).is_correct
}

/// Canonical comparable form of a word: annotations stripped, lowercased.
pub fn normalize(raw: &str) -> String {
    strip_annotations(raw).to_lowercase()
}

/// Remove every parenthesized group (and the whitespace leading up to it),
/// then collapse whitespace runs and trim.
///
/// Groups do not nest: a group runs from `(` to the next `)`. An opening
/// parenthesis with no closing one after it is kept along with the rest of
/// the string.
pub fn strip_annotations(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut stripped = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };

        stripped.push_str(&rest[..open]);
        // The leading whitespace belongs to the group.
        let kept = stripped.trim_end().len();
        stripped.truncate(kept);

        rest = &rest[open + close + 1..];
    }
    stripped.push_str(rest);

    normalize_whitespace(&stripped)
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_annotations_examples() {
        assert_eq!(strip_annotations("cause (n)"), "cause");
        assert_eq!(strip_annotations("blur (v)"), "blur");
        assert_eq!(strip_annotations("m RNA (messenger RNA)"), "m RNA");
        assert_eq!(strip_annotations("stomach ulcer (gastric ulcer)"), "stomach ulcer");
        assert_eq!(strip_annotations("dairy(adj)"), "dairy");
        assert_eq!(strip_annotations("breeding (သားဖောက်ရန်အတွက်)"), "breeding");
        assert_eq!(
            strip_annotations("contamination (အဆိပ်အတောက်၊ ရောဂါပိုးများ စသည်ဖြင့်)"),
            "contamination"
        );
    }

    #[test]
    fn test_strip_multiple_groups() {
        assert_eq!(strip_annotations("a (b) c (d)"), "a c");
        assert_eq!(strip_annotations("(n) cell (pl)  wall"), "cell wall");
        assert_eq!(strip_annotations("x ((nested) y)"), "x y)");
    }

    #[test]
    fn test_strip_keeps_unmatched_paren() {
        assert_eq!(strip_annotations("gene (dominant"), "gene (dominant");
        assert_eq!(strip_annotations("a (b) c (d"), "a c (d");
    }

    #[test]
    fn test_strip_empty_and_blank() {
        assert_eq!(strip_annotations(""), "");
        assert_eq!(strip_annotations("   "), "");
        assert_eq!(strip_annotations("(only)"), "");
    }

    #[test]
    fn test_strip_collapses_whitespace() {
        assert_eq!(strip_annotations("  cell \t  membrane \n"), "cell membrane");
    }

    #[test]
    fn test_stripped_has_no_parens() {
        for input in ["a (b)", "(x)y(z)", "one (1) two (2) three (3)", "q(r)s"] {
            let out = strip_annotations(input);
            assert!(!out.contains('(') && !out.contains(')'), "{input} -> {out}");
            assert!(!out.contains("  "), "{input} -> {out}");
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Cause (n)"), "cause");
        assert_eq!(normalize("cause"), "cause");
        assert_eq!(normalize(" Stomach Ulcer (gastric ulcer) "), "stomach ulcer");
        assert_eq!(normalize("DNA"), "dna");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in [
            "Cause (n)",
            " Stomach Ulcer (gastric ulcer) ",
            "gene (dominant",
            "x ((nested) y)",
            "ÉCOLE  (fr)",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_compare_answers() {
        let result = compare_answers("  Cause ", "cause (n)");
        assert!(result.is_correct);
        assert_eq!(result.typed_normalized, "cause");
        assert_eq!(result.correct_normalized, "cause");

        let result = compare_answers("effect", "cause (n)");
        assert!(!result.is_correct);
        assert_eq!(result.typed_normalized, "effect");
    }

    #[test]
    fn test_answers_match_ignores_annotation_in_answer() {
        assert!(answers_match("mRNA", "mRNA (messenger RNA)"));
        assert!(answers_match("m  rna", "m RNA (messenger RNA)"));
        assert!(!answers_match("messenger RNA", "m RNA (messenger RNA)"));
        assert!(!answers_match("", "cause (n)"));
    }
}
