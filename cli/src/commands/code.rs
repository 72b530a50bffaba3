//! # SmartSDLC Code Generation Command
//!
//! File: cli/src/commands/code.rs
//!
//! Implements `smartsdlc code --prompt <TEXT>`. Prompts mentioning
//! authentication or login get the canned authentication sample for the chosen
//! language; anything else gets a skeleton quoting the prompt. `--output`
//! writes the result to a file instead of stdout.
//!
use crate::assistant::workbench::{self, Language, Tool};
use crate::common::{pacing::Pacer, ui};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::{fs, io, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
pub struct CodeArgs {
    /// Describe what to build in natural language.
    #[arg(short, long, value_name = "TEXT")]
    pub prompt: String,
    /// Target language. Defaults to `workbench.default_language` from the configuration.
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,
    /// Write the generated code to this file instead of printing it.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub async fn handle_code(args: CodeArgs, pacer: Pacer) -> Result<()> {
    info!("Handling code command...");
    let cfg = config::load_config().context("Failed to load SmartSDLC configuration")?;
    let language = args.lang.unwrap_or(cfg.workbench.default_language);

    let code = workbench::generate_code(&args.prompt, language)?;
    ui::working(&pacer, Tool::Code, cfg.workbench.delay_for(Tool::Code)).await?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", code))
                .with_context(|| format!("Failed to write generated code to {}", path.display()))?;
            ui::notice(&format!("💾 Code written to {}", path.display()))?;
        }
        None => ui::print_block(&mut io::stdout().lock(), &code)?,
    }
    ui::success(Tool::Code)
}
