//! Interactive terminal study session.
//!
//! The CLI owns the conversation. Every line the user types is appended to
//! the history, the whole history goes to the stateless coach, and the reply
//! is appended in turn -- the same loop the browser runs against /api/chat.

use std::io::Write;

use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use biblecoach_core::coach::Coach;
use biblecoach_types::message::Message;
use biblecoach_types::stage::Stage;

use crate::state::AppState;

/// Slash commands recognised by the chat loop.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatCommand {
    Quit,
    Reset,
    Stage,
    Help,
    Unknown(String),
}

impl ChatCommand {
    /// Parse a slash command. Returns `None` for ordinary input.
    pub fn parse(line: &str) -> Option<Self> {
        let cmd = line.strip_prefix('/')?.trim();
        Some(match cmd {
            "quit" | "exit" | "q" => ChatCommand::Quit,
            "reset" | "new" => ChatCommand::Reset,
            "stage" => ChatCommand::Stage,
            "help" | "?" => ChatCommand::Help,
            other => ChatCommand::Unknown(other.to_string()),
        })
    }
}

/// A conversation held by the terminal session.
#[derive(Debug, Default)]
pub struct Conversation {
    history: Vec<Message>,
}

impl Conversation {
    /// Start a conversation with the coach's greeting already in it.
    pub fn start(coach: &Coach) -> (Self, String) {
        let greeting = coach.respond(&[]);
        let conversation = Self {
            history: vec![Message::assistant(greeting.clone())],
        };
        (conversation, greeting)
    }

    /// Record a user turn and the coach's reply to the whole history.
    pub fn turn(&mut self, coach: &Coach, input: &str) -> (Stage, String) {
        self.history.push(Message::user(input));
        let (stage, reply) = coach.respond_with_stage(&self.history);
        self.history.push(Message::assistant(reply.clone()));
        (stage, reply)
    }

    pub fn stage(&self, coach: &Coach) -> Stage {
        coach.stage(&self.history)
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }
}

fn print_coach(text: &str) {
    println!();
    for line in text.lines() {
        println!("  {}", line);
    }
    println!();
}

fn print_help() {
    println!();
    println!("  {}", style("Commands:").bold());
    println!("    /stage   show the current study stage");
    println!("    /reset   start over with a new passage");
    println!("    /quit    leave the session");
    println!();
}

/// Run the interactive loop until EOF or `/quit`.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let coach = state.coach;
    let (mut conversation, greeting) = Conversation::start(&coach);

    println!();
    println!(
        "  {} {}",
        style("Bible Coach").bold().cyan(),
        style("(type /help for commands)").dim()
    );
    print_coach(&greeting);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", style(">").green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match ChatCommand::parse(line) {
            Some(ChatCommand::Quit) => break,
            Some(ChatCommand::Reset) => {
                let (fresh, greeting) = Conversation::start(&coach);
                conversation = fresh;
                tracing::info!("conversation reset");
                print_coach(&greeting);
            }
            Some(ChatCommand::Stage) => {
                println!("  {} {}", style("Stage:").bold(), conversation.stage(&coach));
            }
            Some(ChatCommand::Help) => print_help(),
            Some(ChatCommand::Unknown(cmd)) => {
                println!("  {} unknown command '/{cmd}'", style("!").yellow());
            }
            None => {
                let (stage, reply) = conversation.turn(&coach, line);
                tracing::debug!(%stage, turns = conversation.history().len(), "coach replied");
                print_coach(&reply);
            }
        }
    }

    println!("  {}", style("God bless your study.").dim());
    Ok(())
}
