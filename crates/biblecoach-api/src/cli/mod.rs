//! CLI command definitions for the `bcoach` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod highlights;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Walk through a Bible passage with Observation, Interpretation, and Application.
#[derive(Parser)]
#[command(name = "bcoach", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server with the chat page and /api/chat.
    Serve {
        /// Interface to bind (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory holding index.html and its assets.
        #[arg(long)]
        web_dir: Option<String>,

        /// Export tracing spans to stdout via OpenTelemetry.
        #[arg(long)]
        otel: bool,
    },

    /// Reply to a conversation history read from a JSON file or stdin.
    Ask {
        /// JSON file with `{"messages": [...]}` or a bare array. Reads stdin if omitted.
        file: Option<PathBuf>,
    },

    /// Show the study stage a conversation history is in.
    Stage {
        /// JSON history file. Reads stdin if omitted.
        file: Option<PathBuf>,
    },

    /// Start an interactive study session in the terminal.
    Chat,

    /// Show the keywords and scripture references found in some text.
    Highlights {
        /// Text to analyse. Reads stdin if omitted.
        text: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Read a whole file, or stdin when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["bcoach", "serve", "--port", "9000", "--otel"]);
        match cli.command {
            Commands::Serve {
                port, otel, host, ..
            } => {
                assert_eq!(port, Some(9000));
                assert!(otel);
                assert!(host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["bcoach", "ask", "history.json", "--json", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Ask { file: Some(_) }));
    }

    #[test]
    fn test_read_input_from_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[]").unwrap();
        assert_eq!(read_input(Some(tmp.path())).unwrap(), "[]");
        assert!(read_input(Some(Path::new("/nonexistent/history.json"))).is_err());
    }
}
