//! Shared domain types for the Bible Coach.
//!
//! This crate contains the types passed between the coaching core, the
//! configuration loader, and the CLI/HTTP layer: conversation messages,
//! study stages, keyword highlights, configuration, and error enums.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, and thiserror.

pub mod config;
pub mod error;
pub mod highlights;
pub mod message;
pub mod stage;
