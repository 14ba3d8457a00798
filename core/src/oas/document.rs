#![deny(missing_docs)]

//! # API Document
//!
//! Loads an OpenAPI 3.x document (YAML or JSON) and exposes the parts the page
//! pipeline reads.
//!
//! Paths are reachable only through keyed lookup. The page manifest decides
//! which operations are documented and in what order, so nothing downstream
//! should depend on the document's own path ordering.

use crate::error::{AppError, AppResult};
use crate::oas::ref_utils::{local_pointer, ref_name};
use crate::oas::shims::{ShimOpenApi, ShimOperation, ShimPathItem, ShimPaths, ShimServer};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use utoipa::openapi::RefOr;
use std::path::Path;

/// Maximum number of `$ref` hops followed before giving up on a chain.
const MAX_REF_DEPTH: usize = 32;

/// HTTP methods that can be documented on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `OPTIONS`
    Options,
}

impl HttpMethod {
    /// Parses a manifest method name, case-insensitively.
    ///
    /// Returns `None` for methods the pipeline does not document; callers treat
    /// that as an operation without parameters or body.
    pub fn parse(method: &str) -> Option<Self> {
        match method.trim().to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "options" => Some(HttpMethod::Options),
            _ => None,
        }
    }
}

impl ShimPathItem {
    /// The operation declared for `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&ShimOperation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
        }
    }
}

/// A parsed, read-only OpenAPI document.
pub struct ApiDocument {
    raw: Value,
    servers: Vec<ShimServer>,
    paths: ShimPaths,
}

impl ApiDocument {
    /// Reads and parses the document at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::MissingInput(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parses a document from YAML (or JSON, which is valid YAML).
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        let raw: Value = serde_yaml::from_str(text)?;
        Self::from_value(raw)
    }

    /// Builds the document from an already parsed JSON value.
    pub fn from_value(raw: Value) -> AppResult<Self> {
        let shim: ShimOpenApi = serde_json::from_value(raw.clone())?;

        match (&shim.openapi, &shim.swagger) {
            (Some(version), _) if version.starts_with("3.") => {}
            (Some(version), _) => {
                return Err(AppError::UnsupportedDocument(format!(
                    "OpenAPI version {} is not supported; only 3.x is",
                    version
                )))
            }
            (None, Some(version)) => {
                return Err(AppError::UnsupportedDocument(format!(
                    "Swagger {} documents are not supported; convert to OpenAPI 3.x",
                    version
                )))
            }
            (None, None) => {
                return Err(AppError::UnsupportedDocument(
                    "missing 'openapi' version field".into(),
                ))
            }
        }

        Ok(Self {
            raw,
            servers: shim.servers,
            paths: shim.paths,
        })
    }

    /// Document-level servers in declaration order.
    pub fn servers(&self) -> &[ShimServer] {
        &self.servers
    }

    /// Looks up a path item by its exact template.
    pub fn path_item(&self, path: &str) -> Option<&ShimPathItem> {
        self.paths.items.get(path)
    }

    /// Looks up the operation for `(path, method)`.
    ///
    /// The outer `Option` is the path, the inner one the method.
    pub fn operation(
        &self,
        path: &str,
        method: Option<HttpMethod>,
    ) -> Option<(&ShimPathItem, Option<&ShimOperation>)> {
        let item = self.path_item(path)?;
        Some((item, method.and_then(|m| item.operation(m))))
    }

    /// Resolves a possibly-referenced definition, following `$ref` chains.
    pub fn resolve<'a, T>(&self, item: &'a RefOr<T>) -> AppResult<Cow<'a, T>>
    where
        T: DeserializeOwned + Clone,
    {
        let mut ref_location = match item {
            RefOr::T(value) => return Ok(Cow::Borrowed(value)),
            RefOr::Ref(r) => r.ref_location.clone(),
        };

        for _ in 0..MAX_REF_DEPTH {
            let target = self.lookup_ref(&ref_location)?;
            match serde_json::from_value::<RefOr<T>>(target.clone()) {
                Ok(RefOr::T(value)) => return Ok(Cow::Owned(value)),
                Ok(RefOr::Ref(next)) => ref_location = next.ref_location,
                Err(e) => {
                    return Err(AppError::General(format!(
                        "Failed to parse referenced component '{}': {}",
                        ref_name(&ref_location),
                        e
                    )))
                }
            }
        }

        Err(AppError::UnresolvedRef(format!(
            "{} (reference chain deeper than {})",
            ref_location, MAX_REF_DEPTH
        )))
    }

    fn lookup_ref(&self, ref_location: &str) -> AppResult<&Value> {
        let pointer = local_pointer(ref_location)
            .ok_or_else(|| AppError::UnresolvedRef(format!("{} (not local)", ref_location)))?;
        self.raw
            .pointer(&pointer)
            .ok_or_else(|| AppError::UnresolvedRef(ref_location.to_string()))
    }
}
