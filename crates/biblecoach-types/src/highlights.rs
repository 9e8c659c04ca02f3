//! Keyword highlights derived from a passage or reflection.

use serde::{Deserialize, Serialize};

/// Summary sentence used when no keyword survived extraction.
pub const FALLBACK_SUMMARY: &str = "Key themes emerge from your passage.";

/// Structured keyword information derived from a piece of text.
///
/// Built fresh for every reply and thrown away afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHighlights {
    /// Up to three most frequent keywords, capitalized, most frequent first.
    pub primary: Vec<String>,
    /// Lowercase keywords seen more than once, in first-seen order.
    pub repeated: Vec<String>,
    /// Scripture references such as "John 3:16" found in the raw text.
    pub verses: Vec<String>,
}

impl KeywordHighlights {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.repeated.is_empty() && self.verses.is_empty()
    }

    /// One-line summary of the primary keywords.
    pub fn summary(&self) -> String {
        if self.primary.is_empty() {
            return FALLBACK_SUMMARY.to_string();
        }
        format!("Key themes that stood out: {}.", self.primary.join(", "))
    }
}
