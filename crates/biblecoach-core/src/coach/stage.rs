//! Stage inference from conversation history.
//!
//! There is no stored state. The stage is recomputed on every call by
//! checking which stage markers the coach has already emitted, so a history
//! alone is enough to resume a conversation.

use biblecoach_types::message::Message;
use biblecoach_types::stage::Stage;

/// Infer the current stage of a conversation.
///
/// Evaluated in fixed priority order:
/// 1. no user message at all -> `Intro`
/// 2. no assistant message contains "observation focus" -> `Observation`
/// 3. no assistant message contains "interpretation insights" -> `Interpretation`
/// 4. no assistant message contains "application coaching" -> `Application`
/// 5. otherwise -> `FollowUp`
///
/// Marker matching is a case-insensitive substring test. Progression only
/// moves forward: appending messages can never bring back an earlier stage.
pub fn infer_stage(messages: &[Message]) -> Stage {
    if !messages.iter().any(Message::is_user) {
        return Stage::Intro;
    }

    let assistant_texts: Vec<String> = messages
        .iter()
        .filter(|m| m.is_assistant())
        .map(|m| m.content.to_lowercase())
        .collect();

    for stage in [Stage::Observation, Stage::Interpretation, Stage::Application] {
        let Some(marker) = stage.completion_marker() else {
            continue;
        };
        if !assistant_texts.iter().any(|text| text.contains(marker)) {
            return stage;
        }
    }

    Stage::FollowUp
}

/// Content of the most recent user message, trimmed. Empty if there is none.
pub fn latest_user_message(messages: &[Message]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.is_user())
        .map(|m| m.content.trim())
        .unwrap_or("")
}

/// Every user message, in order, joined with newlines.
pub fn gather_passages(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.is_user())
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_role(content: &str) -> Message {
        Message {
            role: None,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_empty_history_is_intro() {
        assert_eq!(infer_stage(&[]), Stage::Intro);
    }

    #[test]
    fn test_assistant_only_history_is_intro() {
        let messages = vec![Message::assistant("Hello! I'm your Bible Coach.")];
        assert_eq!(infer_stage(&messages), Stage::Intro);
    }

    #[test]
    fn test_first_user_message_is_observation() {
        let messages = vec![Message::user("John 3:16")];
        assert_eq!(infer_stage(&messages), Stage::Observation);
    }

    #[test]
    fn test_markers_advance_stage() {
        let mut messages = vec![
            Message::user("John 3:16"),
            Message::assistant("Observation focus:\n- ..."),
            Message::user("It means God loves us."),
        ];
        assert_eq!(infer_stage(&messages), Stage::Interpretation);

        messages.push(Message::assistant("Interpretation insights:\n- ..."));
        messages.push(Message::user("I will share."));
        assert_eq!(infer_stage(&messages), Stage::Application);

        messages.push(Message::assistant("Application coaching:\n- ..."));
        messages.push(Message::user("I told my friend."));
        assert_eq!(infer_stage(&messages), Stage::FollowUp);
    }

    #[test]
    fn test_markers_match_case_insensitively() {
        let messages = vec![
            Message::user("John 3:16"),
            Message::assistant("OBSERVATION FOCUS"),
        ];
        assert_eq!(infer_stage(&messages), Stage::Interpretation);
    }

    #[test]
    fn test_user_text_never_counts_as_marker() {
        let messages = vec![Message::user("observation focus interpretation insights")];
        assert_eq!(infer_stage(&messages), Stage::Observation);
    }

    #[test]
    fn test_markers_checked_in_priority_order() {
        // A later marker without the earlier one does not skip ahead.
        let messages = vec![
            Message::user("John 3:16"),
            Message::assistant("Application coaching:"),
        ];
        assert_eq!(infer_stage(&messages), Stage::Observation);
    }

    #[test]
    fn test_follow_up_is_sticky() {
        let mut messages = vec![
            Message::user("a"),
            Message::assistant("Observation focus"),
            Message::assistant("Interpretation insights"),
            Message::assistant("Application coaching"),
        ];
        for turn in ["b", "unrelated", "John 1:1"] {
            messages.push(Message::user(turn));
            assert_eq!(infer_stage(&messages), Stage::FollowUp);
            messages.push(Message::assistant("Keep applying God's Word:"));
        }
    }

    #[test]
    fn test_roleless_messages_are_ignored() {
        let messages = vec![no_role("observation focus"), no_role("hello")];
        assert_eq!(infer_stage(&messages), Stage::Intro);

        let messages = vec![Message::user("John 3:16"), no_role("Observation focus")];
        assert_eq!(infer_stage(&messages), Stage::Observation);
    }

    #[test]
    fn test_latest_user_message() {
        let messages = vec![
            Message::user("first"),
            Message::assistant("reply"),
            Message::user("  second  \n"),
            Message::assistant("reply"),
            no_role("ignored"),
        ];
        assert_eq!(latest_user_message(&messages), "second");
        assert_eq!(latest_user_message(&[]), "");
        assert_eq!(latest_user_message(&[Message::assistant("x")]), "");
    }

    #[test]
    fn test_gather_passages() {
        let messages = vec![
            Message::user("John 3:16 "),
            Message::assistant("Observation focus"),
            Message::user("God loves"),
            no_role("skip"),
        ];
        assert_eq!(gather_passages(&messages), "John 3:16 \nGod loves");
        assert_eq!(gather_passages(&[]), "");
    }
}
