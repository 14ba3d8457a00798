#![deny(missing_docs)]

//! # API Docs Core
//!
//! Builds render-ready documentation pages from an OpenAPI 3.x document and a
//! page manifest.
//!
//! ```text
//! ApiDocument + PageManifest
//!     -> GenerationContext
//!     -> build_page (extract_endpoint per path reference)
//!     -> PageRenderer
//!     -> <output dir>/<filename>
//! ```

/// Shared error types.
pub mod error;

/// OpenAPI document adapter.
pub mod oas;

/// JSON formatting helpers.
pub mod json;

/// Page manifest loading.
pub mod manifest;

/// Explicit per-run context.
pub mod context;

/// Per-operation extraction.
pub mod endpoint;

/// Example command synthesis.
pub mod command;

/// Page models and the site driver.
pub mod page;

/// Page rendering.
pub mod render;

pub use command::{synthesize_command, CommandInput, CommandTarget};
pub use context::GenerationContext;
pub use endpoint::{
    extract_endpoint, Endpoint, ParamLocation, Parameter, RequestBodyField, RequestExample,
    ResponseExample, ResponseExamples,
};
pub use error::{AppError, AppResult};
pub use manifest::{PageManifest, PageManifestEntry, PathRef};
pub use oas::{ApiDocument, ExampleValue, HttpMethod};
pub use page::{build_page, generate_pages, FailurePolicy, GenerationReport, PageModel};
pub use render::{HandlebarsRenderer, PageRenderer};
