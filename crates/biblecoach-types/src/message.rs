//! Conversation message types.
//!
//! A conversation is an ordered `Vec<Message>` owned by the caller. The coach
//! only ever reads it; every reply is recomputed from the full history.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::MessageError;

/// Who authored a message.
///
/// Parsing is case-sensitive: only the exact literals `"user"` and
/// `"assistant"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(MessageError::InvalidRole(other.to_string())),
        }
    }
}

/// A single turn in a coaching conversation.
///
/// `role` is optional so that a history with a missing role can still be
/// handed to the coach: such a message matches neither role and is skipped
/// by stage inference and user-message lookups. A missing `content` is
/// treated as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MessageRole>,
    #[serde(default)]
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == Some(MessageRole::User)
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Some(MessageRole::Assistant)
    }
}

/// Parse a conversation history from JSON.
///
/// Accepts either a bare array of messages or an object with a `messages`
/// array (the shape of a chat request body).
pub fn parse_history(json: &str) -> Result<Vec<Message>, MessageError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum History {
        Bare(Vec<Message>),
        Wrapped { messages: Vec<Message> },
    }

    if json.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<History>(json) {
        Ok(History::Bare(messages)) | Ok(History::Wrapped { messages }) => Ok(messages),
        Err(e) => Err(MessageError::InvalidHistory(e.to_string())),
    }
}
