//! Template rendering for stencil.
//! Wraps MiniJinja behind the `TemplateRenderer` trait and registers the
//! fixed table of helper functions available to every template.

use minijinja::{Environment, UndefinedBehavior};

use crate::error::{Error, Result};

/// A pure string-transform helper callable from templates.
pub type HelperFn = fn(&str) -> String;

/// The fixed helper-function table registered with every rendering.
pub fn default_helpers() -> Vec<(&'static str, HelperFn)> {
    vec![
        ("lower", |s| s.to_lowercase()),
        ("upper", |s| s.to_uppercase()),
    ]
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined-variable access is a render error, so a template referencing a
/// field the data document does not carry aborts the run instead of
/// silently producing empty output.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the default helper table.
    pub fn new() -> Self {
        Self::with_helpers(&default_helpers())
    }

    /// Creates a renderer with an explicit helper table.
    pub fn with_helpers(helpers: &[(&'static str, HelperFn)]) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, helper) in helpers {
            let helper = *helper;
            env.add_function(*name, move |value: String| helper(&value));
        }
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if template parsing or rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("gen", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("gen").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
