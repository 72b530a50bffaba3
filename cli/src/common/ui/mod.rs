//! # SmartSDLC UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Small terminal helpers shared by the workbench commands:
//!
//! - `working`: announces a tool's progress label on stderr and waits for the
//!   configured simulated processing time.
//! - `success` / `notice`: one-line status messages on stderr.
//! - `print_block`: writes generated output to stdout, framed by blank lines.
//!
//! Status lines go to stderr so that stdout carries only generated content and
//! can be redirected (`smartsdlc code --prompt ... > main.py`).
//!
use crate::assistant::session::Delay;
use crate::assistant::workbench::Tool;
use crate::core::error::{Result, SmartSdlcError};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

/// Shows `tool`'s progress label and waits `duration` on `delay`.
pub async fn working<D: Delay>(delay: &D, tool: Tool, duration: Duration) -> Result<()> {
    debug!("{:?} working for {:?}", tool, duration);
    {
        let mut err = io::stderr().lock();
        writeln!(err, "⏳ {}...", tool.progress_label())
            .and_then(|()| err.flush())
            .map_err(SmartSdlcError::from)?;
    }
    delay.wait(duration).await;
    Ok(())
}

pub fn success(tool: Tool) -> Result<()> {
    notice(&format!("✅ {}", tool.success_message()))
}

pub fn notice(message: &str) -> Result<()> {
    writeln!(io::stderr().lock(), "{}", message).map_err(SmartSdlcError::from)?;
    Ok(())
}

/// # Print Block (`print_block`)
///
/// Writes generated output framed by blank lines, with trailing whitespace
/// of `content` collapsed into a single newline.
///
/// ## Arguments
///
/// * `out`: Destination, normally a locked stdout.
/// * `content`: The generated text.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once `out` has been flushed.
/// * `Err`: A `SmartSdlcError::Io` when writing fails (for example a closed pipe).
pub fn print_block<W: Write>(out: &mut W, content: &str) -> Result<()> {
    write_block(out, content).map_err(SmartSdlcError::from)?;
    Ok(())
}

fn write_block<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", content.trim_end())?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn print_block_frames_content() {
        let mut out = Vec::new();
        print_block(&mut out, "line one\nline two\n\n").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nline one\nline two\n\n");
    }

    #[test]
    fn print_block_reports_terminal_io_errors() {
        let err = print_block(&mut ClosedPipe, "anything").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SmartSdlcError>(),
            Some(SmartSdlcError::Io { .. })
        ));
        assert!(err.to_string().starts_with("Terminal I/O failed"));
    }
}
