#![deny(missing_docs)]

//! # Document Shims
//!
//! Serde structures acting as an Intermediate Deserialization Layer.
//! These structs map directly to the OpenAPI objects the page pipeline reads;
//! everything else in the document is ignored by serde.
//!
//! References, examples and responses use the `utoipa` object model. Schemas,
//! parameters and request bodies keep local shims: the pipeline renders
//! keywords (`example`, `minItems`, 3.1 type lists) on whatever schema shape
//! the author wrote.

use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::openapi::example::Example;
use utoipa::openapi::{RefOr, Responses};

/// Schema for the root document.
#[derive(Debug, Clone, Deserialize)]
pub struct ShimOpenApi {
    /// OpenAPI version (e.g. "3.0.3").
    pub openapi: Option<String>,
    /// Swagger version, only read to reject 2.0 documents with a clear message.
    pub swagger: Option<String>,
    /// Document-level servers.
    #[serde(default)]
    pub servers: Vec<ShimServer>,
    /// Path items.
    #[serde(default)]
    pub paths: ShimPaths,
}

/// Represents the Paths Object with specification extensions split off.
#[derive(Debug, Clone, Default)]
pub struct ShimPaths {
    /// Parsed path items keyed by path template.
    pub items: IndexMap<String, ShimPathItem>,
    /// Spec extensions attached to the Paths Object (x-...).
    pub extensions: BTreeMap<String, Value>,
}

impl<'de> Deserialize<'de> for ShimPaths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut items = IndexMap::new();
        let mut extensions = BTreeMap::new();

        for (key, value) in raw {
            if key.starts_with("x-") {
                extensions.insert(key, value);
                continue;
            }
            let path_item = serde_json::from_value::<ShimPathItem>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse path item '{}': {}", key, e))
            })?;
            items.insert(key, path_item);
        }

        Ok(Self { items, extensions })
    }
}

/// A Path Item Object, restricted to the methods the page pipeline documents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimPathItem {
    /// GET operation.
    pub get: Option<ShimOperation>,
    /// POST operation.
    pub post: Option<ShimOperation>,
    /// PUT operation.
    pub put: Option<ShimOperation>,
    /// OPTIONS operation.
    pub options: Option<ShimOperation>,
    /// Servers overriding the document default for every operation on this path.
    pub servers: Option<Vec<ShimServer>>,
    /// Parameters shared by every operation on this path.
    #[serde(default)]
    pub parameters: Vec<RefOr<ShimParameter>>,
}

/// An Operation Object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShimOperation {
    /// Unique operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Long form description.
    pub description: Option<String>,
    /// Grouping tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Deprecation flag.
    #[serde(default)]
    pub deprecated: bool,
    /// Operation parameters.
    #[serde(default)]
    pub parameters: Vec<RefOr<ShimParameter>>,
    /// Request body definition.
    #[serde(rename = "requestBody")]
    pub request_body: Option<RefOr<ShimRequestBody>>,
    /// Responses keyed by status code (or `default`).
    #[serde(default)]
    pub responses: Responses,
    /// Servers overriding the path and document defaults.
    pub servers: Option<Vec<ShimServer>>,
}

/// A Server Object, reduced to what the base URL shown on a page needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShimServer {
    /// Server URL, possibly templated with `{variable}` segments.
    pub url: String,
    /// Values for the URL template variables.
    #[serde(default)]
    pub variables: IndexMap<String, ShimServerVariable>,
}

/// A Server Variable Object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShimServerVariable {
    /// Value substituted into the URL.
    pub default: String,
}

/// A Parameter Object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShimParameter {
    /// Name of the parameter.
    pub name: String,
    /// Location of the parameter (query, header, path, cookie).
    #[serde(rename = "in")]
    pub parameter_in: String,
    /// A brief description of the parameter.
    pub description: Option<String>,
    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,
    /// Schema definition.
    pub schema: Option<RefOr<ShimSchema>>,
    /// Raw example; the pipeline expects `{value: "..."}`.
    pub example: Option<Value>,
}

/// A Request Body Object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShimRequestBody {
    /// Media types keyed by content type.
    #[serde(default)]
    pub content: IndexMap<String, ShimMediaType>,
}

/// A Media Type Object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShimMediaType {
    /// Body schema.
    pub schema: Option<RefOr<ShimSchema>>,
    /// Named, author-supplied examples in declaration order.
    #[serde(default)]
    pub examples: IndexMap<String, RefOr<Example>>,
}

/// A Schema Object, reduced to the keywords the page pipeline renders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShimSchema {
    /// `type` keyword (string or, in 3.1, a list of strings).
    #[serde(rename = "type")]
    pub schema_type: Option<ShimSchemaType>,
    /// `format` keyword.
    pub format: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Example value.
    pub example: Option<Value>,
    /// Allowed values.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
    /// Default value.
    pub default: Option<Value>,
    /// Array item schema.
    pub items: Option<Box<RefOr<ShimSchema>>>,
    /// Object properties in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, RefOr<ShimSchema>>,
    /// Required property names.
    #[serde(default)]
    pub required: Vec<String>,
    /// Minimum array length.
    #[serde(rename = "minItems")]
    pub min_items: Option<u64>,
    /// Maximum array length.
    #[serde(rename = "maxItems")]
    pub max_items: Option<u64>,
}

impl ShimSchema {
    /// The declared type name, skipping `"null"` in 3.1 type lists.
    pub fn type_name(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(ShimSchemaType::primary)
    }
}

/// The `type` keyword of a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ShimSchemaType {
    /// `type: string`
    Single(String),
    /// `type: [string, "null"]`
    Multiple(Vec<String>),
}

impl ShimSchemaType {
    /// The first non-null type name.
    pub fn primary(&self) -> Option<&str> {
        match self {
            ShimSchemaType::Single(s) => Some(s.as_str()),
            ShimSchemaType::Multiple(list) => list
                .iter()
                .map(String::as_str)
                .find(|t| *t != "null"),
        }
    }
}
