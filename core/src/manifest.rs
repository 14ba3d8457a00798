#![deny(missing_docs)]

//! # Page Manifest
//!
//! The curated list of documentation pages and the operations each covers.
//!
//! ```yaml
//! pages:
//!   - name: Widgets
//!     description: Manage widgets.
//!     filename: widgets.md
//!     paths:
//!       - {method: get, path: /widgets, index: 0}
//!       - {method: post, path: /widgets, index: 1}
//! ```

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root of the manifest file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PageManifest {
    /// Pages in the order they are generated.
    #[serde(default)]
    pub pages: Vec<PageManifestEntry>,
}

/// One documentation page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageManifestEntry {
    /// Page title.
    pub name: String,
    /// Page introduction.
    #[serde(default)]
    pub description: String,
    /// File name, relative to the output directory.
    #[serde(rename = "filename")]
    pub output_filename: String,
    /// Operations documented on the page.
    #[serde(default)]
    pub paths: Vec<PathRef>,
}

/// A reference to one operation of the API document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PathRef {
    /// HTTP method, any case.
    pub method: String,
    /// Path template exactly as written in the API document.
    pub path: String,
    /// Display position; ties keep manifest order.
    #[serde(rename = "index", default)]
    pub display_index: i64,
}

impl PageManifest {
    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::MissingInput(path.to_path_buf()));
        }
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parses a manifest from YAML.
    pub fn from_yaml(text: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

impl PageManifestEntry {
    /// Path references sorted by display index; equal indices keep manifest order.
    pub fn ordered_paths(&self) -> Vec<&PathRef> {
        let mut refs: Vec<&PathRef> = self.paths.iter().collect();
        refs.sort_by_key(|r| r.display_index);
        refs
    }
}
