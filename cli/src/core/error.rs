//! # SmartSDLC Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout SmartSDLC. The response
//! selector itself never fails; errors only come from the surrounding layers:
//! configuration, user input validation, template rendering and terminal I/O.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `SmartSdlcError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Reject blank input with the message shown to the user
//! if prompt.trim().is_empty() {
//!     return Err(SmartSdlcError::EmptyInput("Please enter a code generation prompt".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the SmartSDLC application.
#[derive(Error, Debug)]
pub enum SmartSdlcError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Blank input for a workbench tool. The payload is the user-facing hint.
    #[error("{0}")]
    EmptyInput(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Document '{path}' not found.")]
    DocumentNotFound { path: String },

    #[error("Template rendering error: {source}")]
    Template { source: tera::Error },

    /// Writing to the terminal failed. Other file I/O is reported through
    /// `anyhow` context instead.
    #[error("Terminal I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
