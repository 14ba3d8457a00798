#![deny(missing_docs)]

//! # OpenAPI Adapter
//!
//! - **shims**: serde structures for the parts of the document the pipeline reads.
//! - **document**: loading, version checks, keyed lookup and `$ref` resolution.
//! - **example_value**: tagged view over raw example payloads.
//! - **ref_utils**: `$ref` to JSON Pointer conversion.

pub mod document;
pub mod example_value;
pub(crate) mod ref_utils;
pub mod shims;

pub use document::{ApiDocument, HttpMethod};
pub use example_value::ExampleValue;
pub use utoipa::openapi::RefOr;
