//! # SmartSDLC Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Implements `smartsdlc chat`, the terminal presentation layer for the chat
//! assistant. It owns the terminal side of the session:
//! - `TerminalView`, the `ChatView` implementation writing to stdout
//! - the interactive prompt loop (REPL) reading stdin
//! - one-shot mode (`--message`, `--quick`) for scripts
//!
//! Reply selection, transcript bookkeeping and pacing all happen in
//! `assistant::session::ChatSession`.
//!
//! ## Examples
//!
//! ```bash
//! # Interactive prompt; type 'bye' to leave, '/code' for a quick action
//! smartsdlc chat
//!
//! # One-shot questions
//! smartsdlc chat -m "What can you do for testing?" -m "thanks!"
//! smartsdlc chat --quick debug
//! ```
//!
use crate::assistant::responder::Responder;
use crate::assistant::samples::QUICK_ACTIONS;
use crate::assistant::session::{ChatSession, ChatView, Delay};
use crate::assistant::transcript::{Speaker, Turn};
use crate::common::pacing::Pacer;
use crate::core::config;
use crate::core::error::{Result, SmartSdlcError};
use anyhow::Context;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

const EXIT_WORDS: &[&str] = &["bye", "exit", "quit"];

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Send this message and exit instead of starting the interactive prompt. Repeatable.
    #[arg(short, long = "message", value_name = "TEXT")]
    pub messages: Vec<String>,
    /// Send a ready-made prompt and exit.
    #[arg(short, long, value_name = "ACTION", value_parser = quick_action_parser())]
    pub quick: Option<String>,
}

fn quick_action_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(QUICK_ACTIONS.iter().map(|(name, _)| *name))
}

/// Looks up the prompt of a quick action by name.
fn quick_prompt(name: &str) -> Option<&'static str> {
    QUICK_ACTIONS
        .iter()
        .find(|(action, _)| action.eq_ignore_ascii_case(name))
        .map(|(_, prompt)| *prompt)
}

/// # Terminal View (`TerminalView`)
///
/// Renders turns as `👤 You: ...` / `🤖 <name>: ...` lines. The typing
/// indicator is only drawn on a real terminal because clearing it relies on
/// ANSI escapes.
pub struct TerminalView<W: Write> {
    out: W,
    assistant_name: String,
    echo_user: bool,
    animate: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, assistant_name: &str, echo_user: bool, animate: bool) -> Self {
        Self {
            out,
            assistant_name: assistant_name.to_string(),
            echo_user,
            animate,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TerminalView<W> {
    fn write_turn(&mut self, turn: &Turn) -> io::Result<()> {
        match turn.speaker() {
            Speaker::User if self.echo_user => writeln!(self.out, "👤 You: {}", turn.text())?,
            Speaker::User => {}
            Speaker::Assistant => {
                writeln!(self.out, "🤖 {}: {}", self.assistant_name, turn.text())?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    fn write_indicator(&mut self, text: &str) -> io::Result<()> {
        if self.animate {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn render_turn(&mut self, turn: &Turn) -> Result<()> {
        self.write_turn(turn).map_err(SmartSdlcError::from)?;
        Ok(())
    }

    fn show_typing(&mut self) -> Result<()> {
        self.write_indicator("🤖 Typing...")
            .map_err(SmartSdlcError::from)?;
        Ok(())
    }

    fn hide_typing(&mut self) -> Result<()> {
        self.write_indicator("\r\x1b[2K")
            .map_err(SmartSdlcError::from)?;
        Ok(())
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds a session from the configuration and runs either the one-shot
/// messages or the interactive prompt.
pub async fn handle_chat(args: ChatArgs, pacer: Pacer) -> Result<()> {
    info!("Handling chat command...");
    let cfg = config::load_config().context("Failed to load SmartSDLC configuration")?;
    let mut session = ChatSession::new(
        Responder::default(),
        pacer,
        cfg.assistant.thinking_delay(),
    );

    let mut one_shot: Vec<String> = args.messages;
    if let Some(action) = args.quick.as_deref() {
        let prompt = quick_prompt(action)
            .with_context(|| format!("Unknown quick action '{}'", action))?;
        one_shot.push(prompt.to_string());
    }

    let stdout = io::stdout();
    let animate = stdout.is_terminal();

    if !one_shot.is_empty() {
        debug!("Running {} one-shot chat message(s)", one_shot.len());
        let mut view = TerminalView::new(stdout.lock(), &cfg.assistant.name, true, animate);
        for message in &one_shot {
            session.submit(message, &mut view).await?;
        }
        return Ok(());
    }

    let echo_user = !io::stdin().is_terminal();
    let mut view = TerminalView::new(stdout.lock(), &cfg.assistant.name, echo_user, animate);
    run_repl(&mut session, &mut view, &cfg.assistant.name).await
}

async fn run_repl<D: Delay, W: Write>(
    session: &mut ChatSession<D>,
    view: &mut TerminalView<W>,
    name: &str,
) -> Result<()> {
    let actions: Vec<String> = QUICK_ACTIONS
        .iter()
        .map(|(action, _)| format!("/{}", action))
        .collect();
    writeln!(view.out, "Chat with {}! Type 'bye' to quit.", name)?;
    writeln!(view.out, "Quick actions: {}", actions.join(" "))?;
    writeln!(view.out)?;

    // Piped input gets no prompt; the view echoes each line as a turn instead.
    let show_prompt = !view.echo_user;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if show_prompt {
            write!(view.out, "You: ")?;
            view.out.flush()?;
        }

        let line = match lines.next_line().await.context("Failed to read from stdin")? {
            Some(line) => line,
            None => {
                if show_prompt {
                    writeln!(view.out)?;
                }
                break;
            }
        };
        let input = line.trim();

        if EXIT_WORDS.iter().any(|word| input.eq_ignore_ascii_case(word)) {
            writeln!(view.out, "🤖 {}: Goodbye!", name)?;
            break;
        }

        let message = match input.strip_prefix('/') {
            Some(action) => match quick_prompt(action) {
                Some(quick) => {
                    if show_prompt {
                        writeln!(view.out, "👤 You: {}", quick)?;
                    }
                    quick
                }
                None => {
                    writeln!(view.out, "Unknown quick action. Try: {}", actions.join(" "))?;
                    continue;
                }
            },
            None => input,
        };

        session.submit(message, view).await?;
    }

    info!(
        "Chat ended after {} turn(s)",
        session.transcript().len()
    );
    Ok(())
}
