//! # SmartSDLC Test Generation Command
//!
//! File: cli/src/commands/testing.rs
//!
//! Implements `smartsdlc test (--code <CODE> | --file <PATH>) [--kind <KIND>]`.
//! Unit tests come from the canned `unittest` suite; integration and e2e tests
//! from a templated browser-driven suite.
//!
use crate::assistant::workbench::{self, TestKind, Tool};
use crate::commands::input::CodeSource;
use crate::common::{pacing::Pacer, ui};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io;
use tracing::info;

#[derive(Parser, Debug)]
pub struct TestArgs {
    #[command(flatten)]
    pub source: CodeSource,
    /// Kind of tests to generate.
    #[arg(short, long, value_enum, default_value_t = TestKind::Unit)]
    pub kind: TestKind,
}

pub async fn handle_test(args: TestArgs, pacer: Pacer) -> Result<()> {
    info!("Handling test command...");
    let cfg = config::load_config().context("Failed to load SmartSDLC configuration")?;

    let code = args.source.read()?.unwrap_or_default();
    let suite = workbench::generate_tests(&code, args.kind)?;

    ui::working(&pacer, Tool::Tests, cfg.workbench.delay_for(Tool::Tests)).await?;
    ui::print_block(&mut io::stdout().lock(), &suite)?;
    ui::success(Tool::Tests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_kind() {
        let args = TestArgs::try_parse_from(["test", "--code", "x = 1", "--kind", "e2e"]).unwrap();
        assert_eq!(args.kind, TestKind::E2e);
        assert_eq!(args.source.code.as_deref(), Some("x = 1"));
    }

    #[test]
    fn test_kind_defaults_to_unit() {
        let args = TestArgs::try_parse_from(["test", "--file", "app.py"]).unwrap();
        assert_eq!(args.kind, TestKind::Unit);
    }

    #[test]
    fn test_code_and_file_conflict() {
        assert!(TestArgs::try_parse_from(["test", "--code", "x", "--file", "y.py"]).is_err());
    }
}
