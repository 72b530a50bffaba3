//! # SmartSDLC Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared terminal-side utilities used by the command modules:
//!
//! - **`pacing`**: the `Pacer` implementation of the assistant's `Delay` port
//!   (real tokio sleep, or instant with `--no-delay`).
//! - **`ui`**: progress labels, status notices and output framing.
//!
//! Keeping these here separates command logic (`commands::`) from the
//! terminal plumbing it relies on, and both from the assistant itself
//! (`assistant::`), which has no terminal dependency.
//!

/// Real and instant implementations of the thinking/processing delay.
pub mod pacing;
/// Terminal status lines and output framing.
pub mod ui;
