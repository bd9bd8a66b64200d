//! stencil is a build-time source generator: it binds a JSON data document
//! (which may carry `//` and `/* */` comments) to one or more templates and
//! writes the rendered output to files, formatting generated Rust source on
//! the way out.

/// Command-line interface module for the stencil application
pub mod cli;

/// Common constants: reserved extensions
pub mod constants;

/// Loading and binding of the data document and named variables
pub mod data;

/// Error types and handling for the stencil application
pub mod error;

/// Formatter strategies for generated Rust source
/// (in-process syn/prettyplease or an external rustfmt subprocess)
pub mod format;

/// The generation pipeline: render, mark, format, write
pub mod generate;

/// Logger initialization
pub mod logger;

/// Resolution of `input[=output]` path spec arguments
pub mod pathspec;

/// Template rendering and the helper-function table
pub mod renderer;

/// Comment stripping for relaxed JSON documents
pub mod strip;
