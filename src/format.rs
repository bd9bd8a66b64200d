//! Output formatting strategies for generated Rust source.
//!
//! Two strategies exist and exactly one is selected for the whole run before
//! any file is generated: a native in-process formatter (syn + prettyplease,
//! deterministic, no subprocess) and an external one that pipes the buffer
//! through `rustfmt` on stdin/stdout. Non-source outputs never reach either.

use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Process-wide formatter selection, threaded explicitly into the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterStrategy {
    /// In-process: parse with syn, reprint with prettyplease
    Native,
    /// External: pipe through a `rustfmt` subprocess
    Rustfmt,
}

impl FormatterStrategy {
    /// Formats a generated source buffer according to the selected strategy.
    ///
    /// # Errors
    /// * `Error::FormatError` if the buffer is not valid Rust source, or the
    ///   external tool fails (its stderr is attached verbatim)
    pub fn format(&self, source: &str) -> Result<String> {
        match self {
            FormatterStrategy::Native => format_native(source),
            FormatterStrategy::Rustfmt => format_rustfmt(source),
        }
    }
}

fn format_native(source: &str) -> Result<String> {
    let file = syn::parse_file(source).map_err(|e| Error::FormatError(e.to_string()))?;
    Ok(prettyplease::unparse(&file))
}

fn format_rustfmt(source: &str) -> Result<String> {
    debug!("piping {} bytes through rustfmt", source.len());

    let mut child = Command::new("rustfmt")
        .args(["--edition", "2021"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::FormatError(format!("failed to run rustfmt: {}", e)))?;

    // stdin handle is dropped at the end of the block so rustfmt sees EOF.
    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::FormatError("failed to open rustfmt stdin".to_string()))?;
        stdin
            .write_all(source.as_bytes())
            .map_err(|e| Error::FormatError(format!("failed to write to rustfmt: {}", e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| Error::FormatError(format!("failed to wait for rustfmt: {}", e)))?;

    if !output.status.success() {
        return Err(Error::FormatError(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| Error::FormatError(format!("rustfmt produced invalid UTF-8: {}", e)))
}

/// Verifies that the `rustfmt` executable is available, failing the run up
/// front rather than midway through the spec list.
pub fn ensure_rustfmt() -> Result<()> {
    let status = Command::new("rustfmt")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| Error::FormatError(format!("failed to find rustfmt: {}", e)))?;

    if !status.success() {
        return Err(Error::FormatError(format!(
            "rustfmt --version exited with {}",
            status
        )));
    }
    Ok(())
}
