//! Coaching logic for the Bible Coach.
//!
//! Two layers, the second built on the first:
//!
//! - [`keyword`]: tokenizes free text, drops stopwords, ranks the remaining
//!   words by frequency, and spots scripture references.
//! - [`coach`]: infers the study stage from the conversation history and
//!   formats the stage's reply, weaving in extracted keywords.
//!
//! Everything here is synchronous and side-effect free apart from tracing
//! events. The crate depends only on `biblecoach-types` -- never on
//! `biblecoach-infra` or any IO crate.

pub mod coach;
pub mod keyword;
