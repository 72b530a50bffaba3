//! # SmartSDLC Assistant
//!
//! File: cli/src/assistant/mod.rs
//!
//! ## Overview
//!
//! Everything the assistant "knows", independent of any terminal:
//!
//! - `responder`: deterministic canned-reply selection for the chat
//! - `transcript`: the append-only chat history
//! - `session`: the chat submission flow and its `ChatView`/`Delay` ports
//! - `workbench`: canned requirements, code, tests, bug reports and docs
//! - `samples`: the compiled-in sample data all of the above draw from
//!
pub mod responder;
pub mod samples;
pub mod session;
pub mod transcript;
pub mod workbench;
