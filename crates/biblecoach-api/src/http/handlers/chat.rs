//! Chat HTTP handler.
//!
//! Endpoint:
//! - POST /api/chat - Reply to a conversation history
//!
//! The browser keeps the conversation and posts all of it on every turn;
//! nothing is stored server-side.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use biblecoach_types::error::MessageError;
use biblecoach_types::message::{Message, MessageRole};

use crate::http::error::AppError;
use crate::state::AppState;

/// A message as submitted by the client.
///
/// `role` is optional at the JSON level so a missing role is reported with
/// the message index instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChatMessageBody {
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
}

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessageBody>,
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatMessageBody {
    fn into_message(self, index: usize) -> Result<Message, MessageError> {
        let role: MessageRole = self
            .role
            .ok_or(MessageError::MissingRole { index })?
            .parse()?;
        Ok(Message::new(role, self.content))
    }
}

impl ChatRequest {
    /// Validate every role and convert into core messages.
    pub fn into_messages(self) -> Result<Vec<Message>, AppError> {
        self.messages
            .into_iter()
            .enumerate()
            .map(|(index, body)| body.into_message(index).map_err(AppError::from))
            .collect()
    }
}

/// POST /api/chat - Produce the coach's next reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let start = Instant::now();
    let messages = request.into_messages()?;

    let (stage, reply) = state.coach.respond_with_stage(&messages);

    tracing::info!(
        %stage,
        message_count = messages.len(),
        elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
        "chat reply"
    );

    Ok(Json(ChatResponse { reply }))
}
