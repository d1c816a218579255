//! Email body templates.
//!
//! Templates are stored in `templates/email/` and use Jinja2 syntax.

pub mod engine;

pub use engine::{render_template, INSPECTION_HTML_TEMPLATE, INSPECTION_TEXT_TEMPLATE};
