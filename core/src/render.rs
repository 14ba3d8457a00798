//! # Page Rendering
//!
//! Turns a [`PageModel`] into page text. The pipeline only depends on the
//! [`PageRenderer`] trait; [`HandlebarsRenderer`] is the stock implementation.
//!
//! Templates see the serialized model: `title`, `description`, `filename` and
//! `endpoints`, each endpoint with the snake_case fields of
//! [`Endpoint`](crate::endpoint::Endpoint). Fields holding pre-escaped or
//! code-block text (`example_json`, `enum_json`, `serialized_value`,
//! `synthesized_command`) should be emitted with triple braces.
//!
//! Helpers:
//! - `upper`: uppercases a string.
//! - `code`: wraps text in a Markdown code span safe for table cells.
//! - `code_json`: like `code`, for the markup-escaped JSON fields, which are
//!   unescaped first since code spans print entities literally.

use crate::error::{AppError, AppResult};
use crate::page::PageModel;
use handlebars::Handlebars;
use helpers::{code, code_json, upper};
use std::fs;
use std::path::Path;

const PAGE_TEMPLATE: &str = "page";
const DEFAULT_TEMPLATE: &str = include_str!("templates/page.md.hbs");

#[allow(missing_docs)]
mod helpers {
    use handlebars::handlebars_helper;

    handlebars_helper!(upper: |s: str| s.to_uppercase());
    handlebars_helper!(code: |s: str| super::code_span(s));
    handlebars_helper!(code_json: |s: str| super::code_span(&html_escape::decode_html_entities(s)));
}

/// Markdown code span for a table cell. Pipes are escaped; text containing a
/// backtick gets a double-backtick fence. Empty text yields `""`.
fn code_span(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let cell = text.replace('|', "\\|");
    if cell.contains('`') {
        format!("`` {} ``", cell)
    } else {
        format!("`{}`", cell)
    }
}

/// Renders one page model to text.
pub trait PageRenderer {
    /// Produces the full contents of the page file.
    fn render(&self, page: &PageModel) -> AppResult<String>;
}

/// Handlebars-backed renderer.
pub struct HandlebarsRenderer {
    handlebars: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Renderer using the built-in Markdown template.
    pub fn new() -> AppResult<Self> {
        Self::from_template_str(DEFAULT_TEMPLATE)
    }

    /// Renderer using the template file at `path`.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::MissingInput(path.to_path_buf()));
        }
        let template = fs::read_to_string(path)?;
        Self::from_template_str(&template)
    }

    /// Renderer using `template` as the page template.
    pub fn from_template_str(template: &str) -> AppResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_helper("upper", Box::new(upper));
        handlebars.register_helper("code", Box::new(code));
        handlebars.register_helper("code_json", Box::new(code_json));
        handlebars.register_template_string(PAGE_TEMPLATE, template)?;
        Ok(Self { handlebars })
    }
}

impl PageRenderer for HandlebarsRenderer {
    fn render(&self, page: &PageModel) -> AppResult<String> {
        Ok(self.handlebars.render(PAGE_TEMPLATE, page)?)
    }
}
