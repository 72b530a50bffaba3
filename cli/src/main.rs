//! # SmartSDLC Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the SmartSDLC CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Choosing the pacing (real delays, or none with `--no-delay`)
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! smartsdlc --help
//!
//! # Ask the assistant something, without the artificial pause
//! smartsdlc --no-delay chat -m "Can you help me with requirements?"
//!
//! # Run a command with increased verbosity
//! smartsdlc -vv code --prompt "login page" --lang javascript
//! ```
//!
use clap::Parser;
use smartsdlc::commands;
use smartsdlc::common::pacing::Pacer;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "smartsdlc",
    about = "🤖 SmartSDLC: AI-assisted software development lifecycle (canned demo)",
    long_about = "Chat with a canned SDLC assistant and try its workbench tools:\n\
                  requirements extraction, code generation, tests, bug analysis and docs.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Skip the simulated thinking/processing pauses.
    #[arg(long, global = true, env = "SMARTSDLC_NO_DELAY")]
    no_delay: bool,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat with the assistant.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Extract requirements from a document.
    #[command(alias = "r")]
    Requirements(commands::requirements::RequirementsArgs),
    /// Generate code from a prompt.
    Code(commands::code::CodeArgs),
    /// Generate tests for a piece of code.
    #[command(alias = "t")]
    Test(commands::testing::TestArgs),
    /// Find bugs and suggest fixes.
    #[command(alias = "b")]
    Bugs(commands::bugs::BugsArgs),
    /// Generate documentation for a piece of code.
    #[command(alias = "d")]
    Docs(commands::docs::DocsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);
    let pacer = Pacer::from_no_delay(cli.no_delay);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, pacer).await,
        Commands::Requirements(args) => {
            commands::requirements::handle_requirements(args, pacer).await
        }
        Commands::Code(args) => commands::code::handle_code(args, pacer).await,
        Commands::Test(args) => commands::testing::handle_test(args, pacer).await,
        Commands::Bugs(args) => commands::bugs::handle_bugs(args, pacer).await,
        Commands::Docs(args) => commands::docs::handle_docs(args, pacer).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
