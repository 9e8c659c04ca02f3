//! Keyword extraction.
//!
//! `extract` turns a passage or reflection into [`KeywordHighlights`]:
//!
//! 1. Lowercase the text and take every maximal run of ASCII letters and
//!    apostrophes as a token. Digits and punctuation separate tokens.
//! 2. Drop stopwords.
//! 3. Count the survivors in first-seen order. The three most frequent
//!    (ties keep first-seen order) become `primary`, capitalized; every
//!    token seen more than once becomes `repeated`.
//! 4. Scan the original, un-lowercased text for scripture references.
//!
//! Extraction is pure and never fails. Empty input yields empty highlights.

pub mod reference;
pub mod stopwords;

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use biblecoach_types::highlights::KeywordHighlights;

pub use reference::find_references;
pub use stopwords::is_stopword;

/// Number of keywords promoted to `primary`.
pub const PRIMARY_LIMIT: usize = 3;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z']+").expect("token pattern is valid"));

/// Extract keyword highlights from free text.
pub fn extract(text: &str) -> KeywordHighlights {
    let lowered = text.to_lowercase();
    let counts = count_keywords(&lowered);

    let primary = rank(&counts)
        .into_iter()
        .take(PRIMARY_LIMIT)
        .map(capitalize)
        .collect();

    let repeated = counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(word, _)| (*word).to_string())
        .collect();

    KeywordHighlights {
        primary,
        repeated,
        verses: find_references(text),
    }
}

/// Split lowercased text into tokens, skipping stopwords.
pub fn tokenize(lowered: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE
        .find_iter(lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stopword(token))
}

/// Count keyword occurrences, keyed in first-seen order.
fn count_keywords(lowered: &str) -> IndexMap<&str, usize> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in tokenize(lowered) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Keywords by descending count. The sort is stable, so equal counts keep
/// the order in which the words were first seen.
fn rank<'a>(counts: &IndexMap<&'a str, usize>) -> Vec<&'a str> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(w, c)| (*w, *c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().map(|(word, _)| word).collect()
}

/// Uppercase the first character (ASCII only) and leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_by_frequency() {
        let highlights = extract("love love love joy joy peace");
        assert_eq!(highlights.primary, vec!["Love", "Joy", "Peace"]);
        assert_eq!(highlights.repeated, vec!["love", "joy"]);
        assert!(highlights.verses.is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let highlights = extract("grace mercy truth hope grace mercy truth hope");
        assert_eq!(highlights.primary, vec!["Grace", "Mercy", "Truth"]);
        assert_eq!(highlights.repeated, vec!["grace", "mercy", "truth", "hope"]);
    }

    #[test]
    fn test_later_word_can_outrank_earlier() {
        let highlights = extract("faith hope hope");
        assert_eq!(highlights.primary, vec!["Hope", "Faith"]);
        assert_eq!(highlights.repeated, vec!["hope"]);
    }

    #[test]
    fn test_john_3_16() {
        let highlights = extract("John 3:16 For God so loved the world.");
        assert_eq!(highlights.primary, vec!["John", "God", "Loved"]);
        assert!(highlights.repeated.is_empty());
        assert_eq!(highlights.verses, vec!["John 3:16"]);
    }

    #[test]
    fn test_stopwords_and_case_folding() {
        let highlights = extract("The LORD is my shepherd; the Lord");
        assert_eq!(highlights.primary, vec!["Lord", "Shepherd"]);
        assert_eq!(highlights.repeated, vec!["lord"]);
    }

    #[test]
    fn test_apostrophes_stay_in_tokens() {
        let highlights = extract("God's love, God's people");
        assert_eq!(highlights.primary, vec!["God's", "Love", "People"]);
        assert_eq!(highlights.repeated, vec!["god's"]);
    }

    #[test]
    fn test_digits_and_punctuation_split_tokens() {
        let tokens: Vec<&str> = tokenize("abc1def,ghi-jkl").collect();
        assert_eq!(tokens, vec!["abc", "def", "ghi", "jkl"]);
    }

    #[test]
    fn test_empty_and_stopword_only_input() {
        assert_eq!(extract(""), KeywordHighlights::default());
        assert_eq!(extract("the and of to a"), KeywordHighlights::default());
        assert_eq!(extract("3:16 !!! ..."), KeywordHighlights::default());
    }

    #[test]
    fn test_fewer_than_three_keywords() {
        let highlights = extract("Grace.");
        assert_eq!(highlights.primary, vec!["Grace"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "1 John 3:16-18 Let us love not in word but in deed and in truth. Love!";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(capitalize("love"), "Love");
        assert_eq!(capitalize("god's"), "God's");
        assert_eq!(capitalize("'tis"), "'tis");
        assert_eq!(capitalize("mIxed"), "MIxed");
        assert_eq!(capitalize(""), "");
    }
}
