//! The stage coach.
//!
//! [`Coach::respond`] takes the full conversation history and returns the
//! next reply. It holds no state of its own: the stage is inferred from the
//! markers in earlier assistant replies and keywords are re-extracted from
//! the user's messages on every call.

pub mod prompts;
pub mod reply;
pub mod stage;

use tracing::debug;

use biblecoach_types::message::Message;
use biblecoach_types::stage::Stage;

use crate::keyword;

pub use stage::{gather_passages, infer_stage, latest_user_message};

/// Guides a user through Observation, Interpretation, and Application.
#[derive(Debug, Default, Clone, Copy)]
pub struct Coach;

impl Coach {
    pub fn new() -> Self {
        Self
    }

    /// Current stage of a conversation.
    pub fn stage(&self, messages: &[Message]) -> Stage {
        infer_stage(messages)
    }

    /// Produce the coach's next reply for a conversation.
    pub fn respond(&self, messages: &[Message]) -> String {
        self.respond_with_stage(messages).1
    }

    /// Produce the next reply together with the stage it was built for.
    #[tracing::instrument(name = "coach_respond", skip_all, fields(message_count = messages.len()))]
    pub fn respond_with_stage(&self, messages: &[Message]) -> (Stage, String) {
        if messages.is_empty() {
            debug!("empty history, sending greeting");
            return (Stage::Intro, reply::intro_message());
        }

        let stage = infer_stage(messages);
        let latest = latest_user_message(messages);
        debug!(%stage, latest_len = latest.len(), "inferred coaching stage");

        let text = match stage {
            Stage::Intro => reply::invite_observation(),
            Stage::Observation => {
                let highlights = keyword::extract(latest);
                debug!(keywords = ?highlights.primary, "observation keywords");
                reply::observation(&highlights)
            }
            Stage::Interpretation => {
                let highlights = keyword::extract(&gather_passages(messages));
                debug!(keywords = ?highlights.primary, "interpretation keywords");
                reply::interpretation(latest, &highlights)
            }
            Stage::Application => {
                let highlights = keyword::extract(&gather_passages(messages));
                debug!(keywords = ?highlights.primary, "application keywords");
                reply::application(latest, &highlights)
            }
            Stage::FollowUp => reply::follow_up(latest),
        };

        (stage, text)
    }
}
