//! Common constants used throughout the stencil application.

/// Reserved extension for template input files
pub const TEMPLATE_EXT: &str = ".tmpl";

/// Extension marking an output file as Rust source
pub const SOURCE_EXT: &str = "rs";
