#![deny(missing_docs)]

//! # Endpoint Models
//!
//! Render-ready value objects built once per documented operation.
//!
//! All structs serialize with snake_case keys; that is the shape page
//! templates see.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Where a parameter is sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// `?name=value`
    Query,
    /// Request header.
    Header,
    /// Path template segment.
    Path,
    /// Cookie.
    Cookie,
    /// Anything else the document declares.
    Other(String),
}

impl ParamLocation {
    /// Parses the `in` field of a parameter.
    pub fn parse(location: &str) -> Self {
        match location {
            "query" => ParamLocation::Query,
            "header" => ParamLocation::Header,
            "path" => ParamLocation::Path,
            "cookie" => ParamLocation::Cookie,
            other => ParamLocation::Other(other.to_string()),
        }
    }

    /// The location as written in the document.
    pub fn as_str(&self) -> &str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Header => "header",
            ParamLocation::Path => "path",
            ParamLocation::Cookie => "cookie",
            ParamLocation::Other(s) => s,
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParamLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A normalized operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Where it is sent.
    pub location: ParamLocation,
    /// Whether it is required.
    pub required: bool,
    /// Description (empty when absent).
    pub description: String,
    /// Schema `type` (empty when absent).
    #[serde(rename = "type")]
    pub ty: String,
    /// Schema `format` (empty when absent).
    pub format: String,
    /// Example value as text.
    pub example: String,
    /// Allowed values as a markup-escaped compact JSON array, or empty.
    pub enum_json: String,
    /// Schema `minItems`.
    pub min_items: Option<u64>,
    /// Schema `maxItems`.
    pub max_items: Option<u64>,
    /// Schema `default`.
    pub default: Option<Value>,
}

/// One property of a JSON request body.
///
/// At most one of `example` and `example_json` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBodyField {
    /// Property name.
    pub name: String,
    /// Rendered type, e.g. `string` or `array[integer]`.
    #[serde(rename = "type")]
    pub ty: String,
    /// Schema `format` (empty when absent).
    pub format: String,
    /// Plain example text.
    pub example: String,
    /// Example that is itself JSON text, markup-escaped.
    pub example_json: String,
    /// Description (empty when absent).
    pub description: String,
    /// Whether the property is listed in the schema's `required`.
    pub required: bool,
    /// Allowed values as a markup-escaped compact JSON array, or empty.
    pub enum_json: String,
    /// Schema `default`.
    pub default: Option<Value>,
    /// Schema `minItems`.
    pub min_items: Option<u64>,
    /// Schema `maxItems`.
    pub max_items: Option<u64>,
}

/// A named, author-supplied request body example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestExample {
    /// Key in the media type's `examples` map.
    pub key: String,
    /// Summary (empty when absent).
    pub summary: String,
    /// Description (empty when absent).
    pub description: String,
    /// The literal value.
    pub raw_value: Value,
    /// `raw_value` pretty-printed with four-space indentation.
    pub serialized_value: String,
}

/// A vendor-extension response example.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseExample {
    /// HTTP status the example belongs to.
    pub status_code: u16,
    /// Example key.
    pub key: String,
    /// Summary (empty when absent).
    pub summary: String,
    /// The example's `value`, pretty-printed, or empty.
    pub serialized_value: String,
}

/// Response examples of one operation, split by status class.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseExamples {
    /// 2xx-3xx examples sorted by key.
    pub success: Vec<ResponseExample>,
    /// 4xx-5xx examples sorted by key.
    pub error: Vec<ResponseExample>,
}

impl ResponseExamples {
    /// Keys of the success list, comma-joined in list order.
    pub fn success_keys(&self) -> String {
        join_keys(&self.success)
    }

    /// Keys of the error list, comma-joined in list order.
    pub fn error_keys(&self) -> String {
        join_keys(&self.error)
    }

    /// Success keys followed by error keys, comma-joined.
    pub fn all_keys(&self) -> String {
        let keys: Vec<&str> = self
            .success
            .iter()
            .chain(self.error.iter())
            .map(|e| e.key.as_str())
            .collect();
        keys.join(",")
    }
}

fn join_keys(examples: &[ResponseExample]) -> String {
    let keys: Vec<&str> = examples.iter().map(|e| e.key.as_str()).collect();
    keys.join(",")
}

/// Everything a page template needs to document one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    /// Effective base URL.
    pub server: String,
    /// Path template as declared in the manifest.
    pub path: String,
    /// Lowercase method name as declared in the manifest.
    pub method: String,
    /// Position requested by the manifest.
    pub display_index: i64,
    /// `operationId`, if declared.
    pub operation_id: Option<String>,
    /// Operation summary (empty when absent).
    pub summary: String,
    /// Operation description (empty when absent).
    pub description: String,
    /// Operation tags.
    pub tags: Vec<String>,
    /// Whether the operation is deprecated.
    pub deprecated: bool,
    /// Every parameter grouped by its `in` value.
    pub parameters_by_location: BTreeMap<String, Vec<Parameter>>,
    /// Query parameters in declaration order.
    pub query_params: Vec<Parameter>,
    /// Header parameters in declaration order.
    pub header_params: Vec<Parameter>,
    /// Path parameters in declaration order.
    pub path_params: Vec<Parameter>,
    /// JSON request body properties.
    pub request_body_fields: Vec<RequestBodyField>,
    /// Named request body examples.
    pub request_examples: Vec<RequestExample>,
    /// 2xx-3xx response examples sorted by key.
    pub response_examples_success: Vec<ResponseExample>,
    /// 4xx-5xx response examples sorted by key.
    pub response_examples_error: Vec<ResponseExample>,
    /// Keys of both response lists, success first, comma-joined.
    pub response_example_keys: String,
    /// Keys of `response_examples_success`, comma-joined.
    pub success_example_keys: String,
    /// Keys of `response_examples_error`, comma-joined.
    pub error_example_keys: String,
    /// Example command line.
    pub synthesized_command: String,
}
