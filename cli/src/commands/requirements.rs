//! # SmartSDLC Requirements Command
//!
//! File: cli/src/commands/requirements.rs
//!
//! ## Overview
//!
//! Implements `smartsdlc requirements <DOCUMENT>`. The document plays the role
//! of the dashboard's PDF upload: it must exist, but it is never opened. Only
//! its file name reaches the workbench, which answers with the sample
//! requirements.
//!
//! ## Examples
//!
//! ```bash
//! smartsdlc requirements docs/srs.pdf
//! ```
//!
//! Example output:
//!
//! ```text
//! Requirements extracted from 'srs.pdf':
//!
//! REQ-001  [High Priority]
//! User Authentication System
//!   The system shall provide secure user authentication with username/password login
//!   (Functional Requirement)
//! ...
//! ```
//!
use crate::assistant::workbench::{self, Tool};
use crate::common::{pacing::Pacer, ui};
use crate::core::config;
use crate::core::error::{SmartSdlcError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
pub struct RequirementsArgs {
    /// The requirements document to "upload" (PDF or any file).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,
}

pub async fn handle_requirements(args: RequirementsArgs, pacer: Pacer) -> Result<()> {
    info!("Handling requirements command...");
    let cfg = config::load_config().context("Failed to load SmartSDLC configuration")?;

    let name = uploaded_name(&args.document)?;
    ui::notice(&format!("📄 File \"{}\" uploaded successfully", name))?;
    let report = workbench::extract_requirements(&name)?;

    ui::working(
        &pacer,
        Tool::Requirements,
        cfg.workbench.delay_for(Tool::Requirements),
    )
    .await?;
    ui::print_block(&mut io::stdout().lock(), &report.render()?)?;
    ui::success(Tool::Requirements)
}

/// The file name shown for an "uploaded" document. The file must exist.
fn uploaded_name(document: &Path) -> Result<String> {
    if !document.is_file() {
        return Err(anyhow!(SmartSdlcError::DocumentNotFound {
            path: document.display().to_string(),
        }));
    }
    Ok(document
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| document.display().to_string()))
}
