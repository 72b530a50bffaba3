//! # SmartSDLC Template Rendering
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Thin wrapper over Tera's one-off rendering. The workbench uses it for the
//! parts of its canned output that depend on user input: generated code
//! skeletons that quote the prompt, the test-suite header naming the test kind,
//! and the plain-text requirement and bug reports.
//!
//! Templates are compiled-in strings; nothing is read from disk. Output is
//! source code and terminal text, so autoescaping is turned off.
//!
use crate::core::error::{SmartSdlcError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::Tera;
use tracing::debug;

/// Renders `template` with the serialized `context`.
///
/// `name` only labels errors and log lines.
pub fn render_str<C: Serialize>(name: &str, template: &str, context: &C) -> Result<String> {
    debug!("Rendering template '{}'", name);
    let tera_context = tera::Context::from_serialize(context).map_err(|e| {
        anyhow!(SmartSdlcError::Template { source: e })
            .context(format!("Failed to build context for template '{}'", name))
    })?;
    Tera::one_off(template, &tera_context, false).map_err(|e| {
        anyhow!(SmartSdlcError::Template { source: e })
            .context(format!("Tera rendering failed for template '{}'", name))
    })
}
