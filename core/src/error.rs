//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// YAML could not be parsed (specification document or page manifest).
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// JSON (de)serialization failed.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// A page template failed to compile.
    #[display("Template Error: {_0}")]
    Template(handlebars::TemplateError),

    /// A page template failed to render.
    #[display("Render Error: {_0}")]
    Render(handlebars::RenderError),

    /// A required input file does not exist.
    #[from(ignore)]
    #[display("Missing input file: {}", _0.display())]
    MissingInput(PathBuf),

    /// The document is not an OpenAPI 3.x description.
    #[from(ignore)]
    #[display("Unsupported document: {_0}")]
    UnsupportedDocument(String),

    /// A `$ref` that is external or points at nothing.
    #[from(ignore)]
    #[display("Unresolved reference: {_0}")]
    UnresolvedRef(String),

    /// An example payload that does not have the shape the pipeline requires.
    #[from(ignore)]
    #[display("Malformed example at {location}: {reason}")]
    MalformedExample {
        /// Where the example lives, e.g. `GET /users response 200`.
        location: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Shorthand for [`AppError::MalformedExample`].
    pub fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedExample {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
