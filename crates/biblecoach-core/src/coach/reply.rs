//! Reply templates, one per stage.
//!
//! The header line of each stage reply doubles as the marker that
//! [`infer_stage`](super::stage::infer_stage) looks for on the next call,
//! so these strings must not drift.

use biblecoach_types::highlights::KeywordHighlights;

use super::prompts::{application_actions, reflection_prompts};

/// Fallback for the repeated-words line when nothing repeats.
pub const NO_REPEATED_WORDS: &str = "Pay attention to repeated words and ideas.";

/// Greeting for an empty conversation.
pub fn intro_message() -> String {
    "Hello! I'm your Bible Coach. Let's walk through Observation, \
     Interpretation, and Application together. Share the passage \
     you're studying so we can begin."
        .to_string()
}

/// Invitation sent when the history has no user message yet.
pub fn invite_observation() -> String {
    "Great! To start with *Observation*, paste the Bible verse or \
     passage you're reading. We'll look for repeated ideas, \
     contrasts, and key details."
        .to_string()
}

pub fn observation(highlights: &KeywordHighlights) -> String {
    let repeated = if highlights.repeated.is_empty() {
        NO_REPEATED_WORDS.to_string()
    } else {
        highlights.repeated.join(", ")
    };
    let focus = highlights.summary();

    format!(
        "Observation focus:\n\
         - {focus}\n\
         - Repeated or emphasized words: {repeated}\n\n\
         Guided questions:\n\
         1. What is happening in this passage?\n\
         2. What do you learn about God or the people involved?\n\
         3. Are there commands, promises, or warnings?\n\n\
         When you're ready, tell me what you think the passage means so we can move into Interpretation."
    )
}

/// Keywords come from every user message; prompts from the latest one.
pub fn interpretation(reflection: &str, highlights: &KeywordHighlights) -> String {
    let key_summary = highlights.summary();
    let [p1, p2, p3] = reflection_prompts(reflection);

    format!(
        "Interpretation insights:\n\
         - {key_summary}\n\
         - Consider how the key themes fit into the broader story of Scripture.\n\n\
         Reflection prompts:\n\
         1. {p1}\n\
         2. {p2}\n\
         3. {p3}\n\n\
         Share how you sense God speaking through this meaning, and we'll craft a personal Application."
    )
}

pub fn application(reflection: &str, highlights: &KeywordHighlights) -> String {
    let [a1, a2, a3] = application_actions(highlights, reflection);

    format!(
        "Application coaching:\n\
         - Turn your interpretation into a specific next step.\n\
         - Invite accountability by sharing your plan with someone you trust.\n\n\
         This week you could:\n\
         1. {a1}\n\
         2. {a2}\n\
         3. {a3}\n\n\
         Let me know how it goes or ask follow-up questions\u{2014}I'm here to keep coaching you."
    )
}

pub fn follow_up(message: &str) -> String {
    let [p1, p2, p3] = reflection_prompts(message);

    format!(
        "Keep applying God's Word:\n\
         - {p1}\n\
         - {p2}\n\
         - {p3}\n\
         Feel free to share progress or start a new passage anytime."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword;

    #[test]
    fn test_intro_message_text() {
        assert_eq!(
            intro_message(),
            "Hello! I'm your Bible Coach. Let's walk through Observation, Interpretation, \
             and Application together. Share the passage you're studying so we can begin."
        );
    }

    #[test]
    fn test_observation_golden() {
        let reply = observation(&keyword::extract("love love joy"));
        assert_eq!(
            reply,
            "Observation focus:\n\
             - Key themes that stood out: Love, Joy.\n\
             - Repeated or emphasized words: love\n\
             \n\
             Guided questions:\n\
             1. What is happening in this passage?\n\
             2. What do you learn about God or the people involved?\n\
             3. Are there commands, promises, or warnings?\n\
             \n\
             When you're ready, tell me what you think the passage means so we can move into Interpretation."
        );
    }

    #[test]
    fn test_observation_fallbacks() {
        let reply = observation(&KeywordHighlights::default());
        assert!(reply.contains("- Key themes emerge from your passage.\n"));
        assert!(reply.contains(
            "- Repeated or emphasized words: Pay attention to repeated words and ideas.\n"
        ));
    }

    #[test]
    fn test_interpretation_layout() {
        let reply = interpretation("Grace", &keyword::extract("mercy"));
        assert!(reply.starts_with("Interpretation insights:\n- Key themes that stood out: Mercy.\n"));
        assert!(reply.contains("1. What do you learn about Grace here?\n"));
        assert!(reply.contains("2. How does this shape your view of Grace?\n"));
        assert!(reply.ends_with("we'll craft a personal Application."));
    }

    #[test]
    fn test_application_layout() {
        let reply = application("", &KeywordHighlights::default());
        assert!(reply.starts_with("Application coaching:\n"));
        assert!(reply.contains(
            "This week you could:\n1. Write a prayer asking God to help you live this out.\n"
        ));
        assert!(reply.ends_with("follow-up questions\u{2014}I'm here to keep coaching you."));
    }

    #[test]
    fn test_follow_up_layout() {
        let reply = follow_up("");
        assert_eq!(
            reply,
            "Keep applying God's Word:\n\
             - What does this reveal about God's character?\n\
             - How does this passage point to Jesus or the gospel?\n\
             - Where might there be tension between this truth and your current habits?\n\
             Feel free to share progress or start a new passage anytime."
        );
    }
}
