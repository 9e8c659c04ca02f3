//! HTTP layer for the Bible Coach.
//!
//! Axum router with a single chat endpoint at `/api/chat`, a health check,
//! and the chat page served from the configured web directory.

pub mod error;
pub mod handlers;
pub mod router;
