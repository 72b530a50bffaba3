//! # SmartSDLC CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Verifies top-level CLI behavior: `--help`, `--version`, unknown commands
//! and configuration errors surfacing as a non-zero exit.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    smartsdlc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("chat")
                .and(predicate::str::contains("requirements"))
                .and(predicate::str::contains("bugs"))
                .and(predicate::str::contains("--no-delay")),
        );
}

#[test]
fn test_version_flag() {
    smartsdlc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_fails() {
    smartsdlc_cmd().arg("deploy").assert().failure();
}

#[test]
fn test_invalid_config_fails_with_message() {
    let (mut cmd, _dir) = isolated_cmd("[assistant]\nthinking_delay_ms = 999999\n");
    cmd.args(["chat", "-m", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to load SmartSDLC configuration"));
}

#[test]
fn test_missing_explicit_config_fails() {
    smartsdlc_cmd()
        .env("SMARTSDLC_CONFIG", "/definitely/not/here/config.toml")
        .args(["--no-delay", "docs", "--code", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
