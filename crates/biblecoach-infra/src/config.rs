//! Configuration loader.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`CoachConfig`]. Falls back to defaults when the file is missing or
//! malformed, so loading never fails.

use std::path::Path;

use biblecoach_types::config::CoachConfig;
use biblecoach_types::error::ConfigError;

/// Environment variable that overrides `server.web_dir`.
pub const WEB_DIR_ENV: &str = "BIBLECOACH_WEB_DIR";

/// Turn the outcome of [`read_config`] into a usable config.
///
/// - Missing file: defaults, logged at debug.
/// - Unreadable or unparsable file: defaults, logged as a warning.
/// - `BIBLECOACH_WEB_DIR`, when set, overrides `server.web_dir`.
///
/// Kept apart from [`read_config`] so the binary can read the file before
/// the tracing subscriber exists and report problems once it does.
pub fn settle_config(
    loaded: Result<Option<CoachConfig>, ConfigError>,
    data_dir: &Path,
) -> CoachConfig {
    let mut config = match loaded {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(
                "No config.toml found in {}, using defaults",
                data_dir.display()
            );
            CoachConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            CoachConfig::default()
        }
    };

    if let Ok(web_dir) = std::env::var(WEB_DIR_ENV) {
        if !web_dir.is_empty() {
            config.server.web_dir = web_dir;
        }
    }

    config
}

/// Read and parse `{data_dir}/config.toml`. `Ok(None)` when the file does
/// not exist.
pub async fn read_config(data_dir: &Path) -> Result<Option<CoachConfig>, ConfigError> {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read(format!(
                "{}: {err}",
                config_path.display()
            )));
        }
    };

    toml::from_str::<CoachConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse(format!("{}: {err}", config_path.display())))
}
