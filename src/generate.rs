//! The generation pipeline: renders each path spec against the bound data
//! and commits the result to disk.
//!
//! Specs are processed strictly one at a time in argument order. Any failure
//! aborts the whole run; outputs written for earlier specs are left in place
//! and later ones are never produced. Writes are not transactional.

use log::debug;
use std::fs;
use std::path::Path;

use crate::data::BoundData;
use crate::error::{Error, Result};
use crate::format::FormatterStrategy;
use crate::pathspec::PathSpec;
use crate::renderer::TemplateRenderer;

/// Renders every path spec against `data` and writes the results.
///
/// # Errors
/// Fails fast on template read, parse, render, format, or write failure,
/// each reported with the offending path and the underlying cause.
pub fn run(
    renderer: &dyn TemplateRenderer,
    data: &BoundData,
    specs: &[PathSpec],
    formatter: FormatterStrategy,
) -> Result<()> {
    let context = data.context()?;
    for spec in specs {
        generate(renderer, &context, spec, formatter)?;
    }
    Ok(())
}

fn generate(
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
    spec: &PathSpec,
    formatter: FormatterStrategy,
) -> Result<()> {
    debug!("generating {}", spec);

    let template = fs::read_to_string(&spec.input).map_err(|e| {
        Error::TemplateError(format!("failed to read '{}': {}", spec.input.display(), e))
    })?;

    let mut buf = String::new();
    if spec.is_source_file() {
        // An inner doc comment survives both formatter strategies; the
        // native one reprints from a syntax tree that keeps doc comments
        // but drops plain ones.
        buf.push_str(&format!(
            "//! Code generated by {}. DO NOT EDIT.\n\n",
            spec.input.display()
        ));
    }

    let rendered = renderer.render(&template, context).map_err(|e| match e {
        Error::MinijinjaError(e) => Error::TemplateError(format!(
            "error processing template '{}': {}",
            spec.input.display(),
            e
        )),
        other => other,
    })?;
    buf.push_str(&rendered);

    if spec.is_source_file() {
        buf = formatter.format(&buf).map_err(|e| match e {
            Error::FormatError(msg) => Error::FormatError(format!(
                "error formatting '{}': {}",
                spec.output.display(),
                msg
            )),
            other => other,
        })?;
    }

    write_output(&spec.input, &spec.output, &buf)?;
    debug!("wrote {} bytes to {}", buf.len(), spec.output.display());
    Ok(())
}

/// Writes `content` to `output`, overwriting any existing file, and copies
/// the permission bits from `input` so generated files match their template.
fn write_output(input: &Path, output: &Path, content: &str) -> Result<()> {
    let permissions = fs::metadata(input)?.permissions();
    fs::write(output, content)?;
    fs::set_permissions(output, permissions)?;
    Ok(())
}
