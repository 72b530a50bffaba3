//! # SmartSDLC Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! SmartSDLC simulates an AI-assisted software development lifecycle tool.
//! Every answer is canned: the chat assistant picks a reply by scanning an
//! ordered table of trigger words, and the workbench tools return sample
//! requirements, code, tests, bug reports and documentation.
//!
//! The library is split the same way the binary uses it:
//! - `assistant`: reply selection, transcript, chat session, workbench, sample data
//! - `commands`: the terminal presentation layer (one module per CLI command)
//! - `common`: terminal plumbing (pacing, status output)
//! - `core`: configuration, errors, templating
//!
//! Exposing these as a library lets integration tests in `cli/tests/` drive
//! the assistant directly as well as through the `smartsdlc` binary.
//!
pub mod assistant;
pub mod commands;
pub mod common;
pub mod core;
