//! Error handling for the stencil application.
//! Defines the error taxonomy and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Custom error types for stencil operations.
///
/// Every error is fatal to the whole run; there is no local recovery in the
/// pipeline. The comment stripper is the sole exception and it never raises;
/// it falls back to the original bytes instead (see [`crate::strip`]).
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Bad command-line input: invalid path spec extension or a malformed
    /// NAME=VALUE variable token
    #[error("Usage error: {0}.")]
    UsageError(String),

    /// The data document could not be read, or is invalid JSON after
    /// comment stripping
    #[error("Invalid data document: {0}.")]
    DataError(String),

    /// Template read, parse, or render failure, carrying the offending path
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Raw engine error surfaced at the renderer seam; the pipeline rewraps
    /// it into `TemplateError` with path context
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// The native formatter rejected the generated bytes, or the external
    /// tool exited non-zero (its stderr is attached verbatim)
    #[error("Format error: {0}.")]
    FormatError(String),
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
