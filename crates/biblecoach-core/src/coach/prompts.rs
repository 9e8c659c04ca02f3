//! Reflection prompts and application actions.
//!
//! Both fall back to fixed generic text when no keyword is available, and
//! otherwise weave the top keywords into templated sentences.

use biblecoach_types::highlights::KeywordHighlights;

use crate::keyword;

/// Prompts used when the text yields no keywords.
pub const GENERIC_PROMPTS: [&str; 3] = [
    "What does this reveal about God's character?",
    "How does this passage point to Jesus or the gospel?",
    "Where might there be tension between this truth and your current habits?",
];

/// Actions used when the passages yield no keywords.
pub const GENERIC_ACTIONS: [&str; 3] = [
    "Write a prayer asking God to help you live this out.",
    "Share your insight with a friend or small group.",
    "Set a reminder to revisit this passage later this week.",
];

/// Replaces the first action when the reflection mentions prayer.
pub const PRAYER_ACTION: &str =
    "Turn your reflection into a written prayer and revisit it tomorrow.";

/// Three reflection prompts for a piece of text.
///
/// With keywords, the prompts use the first, the second (or the first again
/// when only one exists), and the last primary keyword.
pub fn reflection_prompts(text: &str) -> [String; 3] {
    let primary = keyword::extract(text).primary;
    let (Some(first), Some(last)) = (primary.first(), primary.last()) else {
        return GENERIC_PROMPTS.map(str::to_string);
    };
    let second = primary.get(1).unwrap_or(first);

    [
        format!("What do you learn about {first} here?"),
        format!("How does this shape your view of {second}?"),
        format!("How could focusing on {last} transform your relationships?"),
    ]
}

/// Three application actions built around the top keyword.
///
/// If `reflection` mentions "pray" (any case), the first action becomes a
/// prayer-specific one.
pub fn application_actions(highlights: &KeywordHighlights, reflection: &str) -> [String; 3] {
    let Some(top) = highlights.primary.first() else {
        return GENERIC_ACTIONS.map(str::to_string);
    };
    let focus = top.to_lowercase();

    let mut actions = [
        format!("Identify one habit that reflects {focus} and practice it today."),
        format!("Encourage someone who needs to hear about {focus}."),
        format!("Note a situation this week where you can display {focus} intentionally."),
    ];
    if reflection.to_lowercase().contains("pray") {
        actions[0] = PRAYER_ACTION.to_string();
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflection_prompts_generic_without_keywords() {
        assert_eq!(reflection_prompts(""), GENERIC_PROMPTS.map(str::to_string));
        assert_eq!(
            reflection_prompts("it is what it is"),
            GENERIC_PROMPTS.map(str::to_string)
        );
    }

    #[test]
    fn test_reflection_prompts_two_keywords() {
        assert_eq!(
            reflection_prompts("I told my friend about it"),
            [
                "What do you learn about Told here?".to_string(),
                "How does this shape your view of Friend?".to_string(),
                "How could focusing on Friend transform your relationships?".to_string(),
            ]
        );
    }

    #[test]
    fn test_reflection_prompts_single_keyword_repeats() {
        let prompts = reflection_prompts("Grace!");
        assert_eq!(prompts[0], "What do you learn about Grace here?");
        assert_eq!(prompts[1], "How does this shape your view of Grace?");
        assert_eq!(
            prompts[2],
            "How could focusing on Grace transform your relationships?"
        );
    }

    #[test]
    fn test_reflection_prompts_three_keywords() {
        let prompts = reflection_prompts("It means God loves us and sent Jesus.");
        assert_eq!(prompts[0], "What do you learn about Means here?");
        assert_eq!(prompts[1], "How does this shape your view of God?");
        assert_eq!(
            prompts[2],
            "How could focusing on Loves transform your relationships?"
        );
    }

    #[test]
    fn test_application_actions_generic_without_keywords() {
        let highlights = KeywordHighlights::default();
        assert_eq!(
            application_actions(&highlights, "I will pray"),
            GENERIC_ACTIONS.map(str::to_string)
        );
    }

    #[test]
    fn test_application_actions_use_lowercased_focus() {
        let highlights = keyword::extract("Love love joy");
        let actions = application_actions(&highlights, "I will share God's love.");
        assert_eq!(
            actions[0],
            "Identify one habit that reflects love and practice it today."
        );
        assert_eq!(actions[1], "Encourage someone who needs to hear about love.");
        assert_eq!(
            actions[2],
            "Note a situation this week where you can display love intentionally."
        );
    }

    #[test]
    fn test_application_actions_prayer_override() {
        let highlights = keyword::extract("Love love joy");
        let actions = application_actions(&highlights, "I will PRAY about this");
        assert_eq!(actions[0], PRAYER_ACTION);
        assert_eq!(actions[1], "Encourage someone who needs to hear about love.");

        // Substring match, as in "prayer" or "praying".
        let actions = application_actions(&highlights, "Keep praying");
        assert_eq!(actions[0], PRAYER_ACTION);
    }
}
