use thiserror::Error;

/// Errors raised while turning caller input into conversation messages.
///
/// The coaching core itself never fails; these are produced by the layers
/// that validate a history before handing it to the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("invalid message role: '{0}' (expected 'user' or 'assistant')")]
    InvalidRole(String),

    #[error("message {index} has no role")]
    MissingRole { index: usize },

    #[error("invalid conversation history: {0}")]
    InvalidHistory(String),
}

/// Errors related to configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(String),

    #[error("failed to parse config file: {0}")]
    Parse(String),
}
