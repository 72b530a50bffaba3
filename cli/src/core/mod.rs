//! # SmartSDLC Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational infrastructure shared by the assistant and the command
//! modules:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Tera rendering for generated snippets and reports
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{SmartSdlcError, Result}; // For error handling
//! use crate::core::templating; // For rendering canned output
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
