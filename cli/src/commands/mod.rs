//! # SmartSDLC Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The terminal presentation layer: one module per top-level `smartsdlc`
//! command. Each defines a `clap` arguments struct and an async
//! `handle_<command>(args, pacer)` function that `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `chat`: Conversation with the canned assistant (REPL or one-shot)
//! - `requirements`: Requirements "extracted" from an uploaded document
//! - `code`: Code generation from a natural-language prompt
//! - `test`: Test suite generation for a piece of code
//! - `bugs`: Bug analysis with fixed code
//! - `docs`: Documentation generation
//!

/// `smartsdlc bugs`: identified issues and fixed code.
pub mod bugs;
/// `smartsdlc chat`: the chat REPL and its terminal view.
pub mod chat;
/// `smartsdlc code`: code generation.
pub mod code;
/// `smartsdlc docs`: documentation generation.
pub mod docs;
/// Shared `--code`/`--file` arguments.
pub mod input;
/// `smartsdlc requirements`: requirements extraction.
pub mod requirements;
/// `smartsdlc test`: test generation.
pub mod testing;
