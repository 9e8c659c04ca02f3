//! One-shot replies: `bcoach ask` and `bcoach stage`.

use std::path::Path;

use console::style;

use biblecoach_types::message::parse_history;

use crate::state::AppState;

use super::read_input;

/// Print the coach's reply to a history.
pub fn ask(state: &AppState, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let messages = parse_history(&read_input(file)?)?;
    let (stage, reply) = state.coach.respond_with_stage(&messages);
    tracing::debug!(%stage, message_count = messages.len(), "answered history");

    if json {
        let out = serde_json::json!({
            "stage": stage,
            "reply": reply,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{reply}");
    }
    Ok(())
}

/// Print the inferred stage of a history.
pub fn stage(state: &AppState, file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let messages = parse_history(&read_input(file)?)?;
    let stage = state.coach.stage(&messages);

    if json {
        let out = serde_json::json!({
            "stage": stage,
            "message_count": messages.len(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "  {} {}",
            style("Stage:").bold(),
            style(stage).cyan()
        );
    }
    Ok(())
}
