//! Common English function words ignored by keyword extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words that never count as keywords. Compared against lowercased tokens.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "of", "to", "a", "in", "that", "is", "for", "with", "on", "as", "be", "by",
    "he", "she", "they", "them", "his", "her", "their", "it", "was", "are", "you", "your", "i",
    "me", "my", "we", "our", "us", "will", "shall", "not", "but", "have", "has", "had", "so",
    "at", "from", "this", "these", "those", "an", "who", "whom", "which", "into", "out", "up",
    "down", "over", "under", "about", "what", "when", "where", "why", "how", "also",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Whether a lowercased token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_words_are_stopwords() {
        for word in ["the", "and", "i", "will", "about", "also"] {
            assert!(is_stopword(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn test_content_words_are_not_stopwords() {
        for word in ["god", "love", "world", "pray", "jesus"] {
            assert!(!is_stopword(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(!is_stopword("The"));
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(STOPWORD_SET.len(), STOPWORDS.len());
    }
}
