//! # SmartSDLC CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in
//! `cli/tests/` is compiled as its own test crate; this one is pulled in with
//! `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// # Get SmartSDLC Command (`smartsdlc_cmd`)
///
/// An `assert_cmd::Command` for the compiled `smartsdlc` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn smartsdlc_cmd() -> Command {
    Command::cargo_bin("smartsdlc").expect("Failed to find smartsdlc binary for testing")
}

/// # Isolated Command (`isolated_cmd`)
///
/// Like `smartsdlc_cmd`, but without delays and with configuration read only
/// from `config_toml` (written to a temporary file), so the developer's own
/// config files cannot change the outcome. Keep the returned `TempDir` alive
/// for the duration of the command.
pub fn isolated_cmd(config_toml: &str) -> (Command, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir for config");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, config_toml).expect("Failed to write test config");

    let mut cmd = smartsdlc_cmd();
    cmd.env("SMARTSDLC_CONFIG", &config_path)
        .env_remove("RUST_LOG")
        .arg("--no-delay")
        .current_dir(dir.path());
    (cmd, dir)
}
