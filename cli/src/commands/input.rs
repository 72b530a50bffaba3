//! # Code Input Arguments
//!
//! File: cli/src/commands/input.rs
//!
//! The `test`, `bugs` and `docs` commands all take a piece of source code,
//! either inline (`--code`) or from a file (`--file`). `CodeSource` is
//! flattened into each of their argument structs.
//!
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Args, Debug, Default)]
pub struct CodeSource {
    /// Source code passed inline.
    #[arg(long, value_name = "CODE", conflicts_with = "file")]
    pub code: Option<String>,
    /// Read the source code from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl CodeSource {
    /// Returns the provided code, or `None` when neither flag was given.
    pub fn read(&self) -> Result<Option<String>> {
        if let Some(code) = &self.code {
            return Ok(Some(code.clone()));
        }
        match &self.file {
            Some(path) => {
                debug!("Reading code from {}", path.display());
                let code = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read code file: {}", path.display()))?;
                Ok(Some(code))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn inline_code_is_returned_as_is() {
        let source = CodeSource {
            code: Some("def f(): pass".into()),
            file: None,
        };
        assert_eq!(source.read().unwrap().as_deref(), Some("def f(): pass"));
    }

    #[test]
    fn file_code_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.py");
        fs::write(&path, "print('hi')\n").unwrap();
        let source = CodeSource {
            code: None,
            file: Some(path),
        };
        assert_eq!(source.read().unwrap().as_deref(), Some("print('hi')\n"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let source = CodeSource {
            code: None,
            file: Some(PathBuf::from("/definitely/not/here.py")),
        };
        let err = source.read().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.py"));
    }

    #[test]
    fn nothing_given_is_none() {
        assert!(CodeSource::default().read().unwrap().is_none());
    }
}
