//! Scripture reference detection ("John 3:16", "1 John 3:16-18").

use std::sync::LazyLock;

use regex::Regex;

/// Optional book number 1-3, optional space, book name, space,
/// chapter:verse, optional -verse range end.
///
/// "Space" also covers the information separators U+001C..U+001F, which
/// `\s` leaves out.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[1-3]?[\s\x1C-\x1F]?[A-Za-z]+[\s\x1C-\x1F]\d+:\d+(?:-\d+)?")
        .expect("reference pattern is valid")
});

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Find scripture references in raw text, left to right, without overlap.
///
/// Each match is trimmed of surrounding whitespace.
pub fn find_references(text: &str) -> Vec<String> {
    REFERENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_matches(is_separator).to_string())
        .collect()
}
