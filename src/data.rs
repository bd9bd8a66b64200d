//! Loading and binding of the data document.
//! Reads the relaxed JSON file, strips comments, parses it, and pairs the
//! resulting value tree with the caller-supplied named variables.

use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::strip::strip_comments;

/// The single context object passed to every template rendering.
///
/// Templates see the parsed document under `doc` and the named variables
/// under `vars`.
#[derive(Debug, Serialize)]
pub struct BoundData {
    /// Parsed data document
    pub doc: serde_json::Value,
    /// Caller-supplied NAME=VALUE overrides, keys unique
    pub vars: IndexMap<String, String>,
}

impl BoundData {
    /// Reads the data document at `path`, sanitizes it through the comment
    /// stripper, and parses it with serde_json.
    ///
    /// # Errors
    /// * `Error::DataError` if the file cannot be read or the sanitized
    ///   bytes are not valid JSON
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        vars: IndexMap<String, String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| {
            Error::DataError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        let doc = serde_json::from_slice(&strip_comments(&raw))
            .map_err(|e| Error::DataError(format!("invalid JSON data: {}", e)))?;

        Ok(Self { doc, vars })
    }

    /// Serializes the bound data into the rendering context value.
    pub fn context(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::DataError(e.to_string()))
    }
}

/// Parses one `NAME=VALUE` variable token.
///
/// # Errors
/// * `Error::UsageError` if the token contains no `=`
pub fn parse_var(token: &str) -> Result<(String, String)> {
    let (name, value) = token.split_once('=').ok_or_else(|| {
        Error::UsageError(format!("expected NAME=VALUE, got '{}'", token))
    })?;
    Ok((name.to_string(), value.to_string()))
}

/// Collects repeated `-d` tokens into the variable mapping, last value
/// winning for duplicate names.
pub fn parse_vars(tokens: &[String]) -> Result<IndexMap<String, String>> {
    let mut vars = IndexMap::with_capacity(tokens.len());
    for token in tokens {
        let (name, value) = parse_var(token)?;
        vars.insert(name, value);
    }
    Ok(vars)
}
