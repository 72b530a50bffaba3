//! # SmartSDLC Documentation Command
//!
//! File: cli/src/commands/docs.rs
//!
//! Implements `smartsdlc docs (--code <CODE> | --file <PATH>) [--kind <KIND>]`:
//! an API reference, a README, or an inline doc comment block.
//!
use crate::assistant::workbench::{self, DocKind, Tool};
use crate::commands::input::CodeSource;
use crate::common::{pacing::Pacer, ui};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
pub struct DocsArgs {
    #[command(flatten)]
    pub source: CodeSource,
    /// Kind of documentation to generate.
    #[arg(short, long, value_enum, default_value_t = DocKind::Inline)]
    pub kind: DocKind,
}

pub async fn handle_docs(args: DocsArgs, pacer: Pacer) -> Result<()> {
    info!("Handling docs command...");
    let cfg = config::load_config().context("Failed to load SmartSDLC configuration")?;

    let code = args.source.read()?.unwrap_or_default();
    let docs = workbench::generate_docs(&code, args.kind)?;

    ui::working(&pacer, Tool::Docs, cfg.workbench.delay_for(Tool::Docs)).await?;
    ui::print_block(&mut io::stdout().lock(), docs)?;
    ui::success(Tool::Docs)
}
