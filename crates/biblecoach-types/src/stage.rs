//! The stages of an Observation / Interpretation / Application study.
//!
//! Stages are never stored. The current stage is recomputed from the
//! conversation by looking for the marker phrase each stage's reply opens
//! with; once a marker has been emitted, the coach moves past that stage
//! for good.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Where the user is in the study, in progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intro,
    Observation,
    Interpretation,
    Application,
    FollowUp,
}

impl Stage {
    /// All stages in the order the coach walks through them.
    pub const ALL: [Stage; 5] = [
        Stage::Intro,
        Stage::Observation,
        Stage::Interpretation,
        Stage::Application,
        Stage::FollowUp,
    ];

    /// Lowercase phrase that, once present in any assistant message, means
    /// this stage has been completed.
    ///
    /// `Intro` is left by the user speaking, not by a marker, and `FollowUp`
    /// is terminal, so neither has one.
    pub fn completion_marker(&self) -> Option<&'static str> {
        match self {
            Stage::Observation => Some("observation focus"),
            Stage::Interpretation => Some("interpretation insights"),
            Stage::Application => Some("application coaching"),
            Stage::Intro | Stage::FollowUp => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Observation => "observation",
            Stage::Interpretation => "interpretation",
            Stage::Application => "application",
            Stage::FollowUp => "follow_up",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intro" => Ok(Stage::Intro),
            "observation" => Ok(Stage::Observation),
            "interpretation" => Ok(Stage::Interpretation),
            "application" => Ok(Stage::Application),
            "follow_up" | "follow-up" => Ok(Stage::FollowUp),
            other => Err(format!("invalid stage: '{other}'")),
        }
    }
}
