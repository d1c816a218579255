//! Template engine for email bodies using Jinja2 syntax.
//!
//! Templates live in `templates/email/` and are compiled into the binary, so
//! rendering never depends on the working directory.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template names. The `.html` suffix turns on HTML auto-escaping.
pub const INSPECTION_TEXT_TEMPLATE: &str = "email/inspection.txt";
pub const INSPECTION_HTML_TEMPLATE: &str = "email/inspection.html";

const TEMPLATES: &[(&str, &str)] = &[
    (
        INSPECTION_TEXT_TEMPLATE,
        include_str!("../../../templates/email/inspection.txt.jinja"),
    ),
    (
        INSPECTION_HTML_TEMPLATE,
        include_str!("../../../templates/email/inspection.html.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
///
/// let body = render_template(INSPECTION_TEXT_TEMPLATE, context! { cliente => "ACME" })?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a template exists
#[cfg(test)]
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}
