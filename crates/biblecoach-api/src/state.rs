//! Application state shared by CLI commands and HTTP handlers.

use std::path::PathBuf;
use std::sync::Arc;

use biblecoach_core::coach::Coach;
use biblecoach_types::config::CoachConfig;

/// Shared application state.
///
/// The coach is stateless, so cloning the state per request is free and
/// handlers never contend on anything.
#[derive(Clone)]
pub struct AppState {
    pub coach: Coach,
    pub config: Arc<CoachConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(config: CoachConfig, data_dir: PathBuf) -> Self {
        Self {
            coach: Coach::new(),
            config: Arc::new(config),
            data_dir,
        }
    }
}
