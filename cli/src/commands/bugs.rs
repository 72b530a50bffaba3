//! # SmartSDLC Bug Analysis Command
//!
//! File: cli/src/commands/bugs.rs
//!
//! Implements `smartsdlc bugs [--code <CODE> | --file <PATH>]`. Without input
//! the command analyzes the bundled sample of buggy Python, the same snippet
//! the dashboard pre-filled. The report lists the identified issues followed by
//! the corrected code.
//!
use crate::assistant::samples;
use crate::assistant::workbench::{self, Tool};
use crate::commands::input::CodeSource;
use crate::common::{pacing::Pacer, ui};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
pub struct BugsArgs {
    #[command(flatten)]
    pub source: CodeSource,
}

pub async fn handle_bugs(args: BugsArgs, pacer: Pacer) -> Result<()> {
    info!("Handling bugs command...");
    let cfg = config::load_config().context("Failed to load SmartSDLC configuration")?;

    let code = match args.source.read()? {
        Some(code) => code,
        None => {
            ui::notice("No code given; analyzing the bundled sample.")?;
            ui::print_block(&mut io::stdout().lock(), samples::BUGGY_CODE)?;
            samples::BUGGY_CODE.to_string()
        }
    };
    let report = workbench::analyze_bugs(&code)?;

    ui::working(&pacer, Tool::Bugs, cfg.workbench.delay_for(Tool::Bugs)).await?;
    ui::print_block(&mut io::stdout().lock(), &report.render()?)?;
    ui::success(Tool::Bugs)
}
