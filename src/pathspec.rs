//! Path spec resolution for command-line path arguments.
//! Each argument is either `input.tmpl` (output derived by stripping the
//! extension) or `input=output` (explicit pair, no extension validation).

use std::fmt;
use std::path::PathBuf;

use crate::constants::{SOURCE_EXT, TEMPLATE_EXT};
use crate::error::{Error, Result};

/// A resolved input/output file pair for one generation run.
///
/// Constructed once per command-line path argument, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    /// Path of the template file to render
    pub input: PathBuf,
    /// Path the rendered output is written to
    pub output: PathBuf,
}

impl PathSpec {
    /// Resolves a raw `input[=output]` argument into a `PathSpec`.
    ///
    /// The first `=` splits input from output, both taken verbatim. Without
    /// an `=`, the argument must carry the reserved template extension and
    /// the output path is the argument with that suffix truncated.
    ///
    /// # Errors
    /// * `Error::UsageError` if there is no `=` and the argument does not
    ///   end in the template extension
    pub fn resolve(arg: &str) -> Result<Self> {
        if let Some(p) = arg.find('=') {
            return Ok(Self {
                input: PathBuf::from(&arg[..p]),
                output: PathBuf::from(&arg[p + 1..]),
            });
        }

        let output = arg.strip_suffix(TEMPLATE_EXT).ok_or_else(|| {
            Error::UsageError(format!(
                "template file '{}' must have {} extension",
                arg, TEMPLATE_EXT
            ))
        })?;

        Ok(Self { input: PathBuf::from(arg), output: PathBuf::from(output) })
    }

    /// Whether the output is a Rust source file, which triggers the
    /// generated-file marker and the formatter pass. Classification depends
    /// only on the output path's extension.
    pub fn is_source_file(&self) -> bool {
        self.output.extension().is_some_and(|ext| ext == SOURCE_EXT)
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.input.display(), self.output.display())
    }
}
