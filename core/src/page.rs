#![deny(missing_docs)]

//! # Page Assembly
//!
//! Groups endpoints per manifest page and drives rendering of a whole site.
//!
//! Each page is built independently into a `Result`; the [`FailurePolicy`]
//! decides whether a failed page stops the run or is reported and skipped.
//! Pages already written stay on disk either way.

use crate::context::GenerationContext;
use crate::endpoint::{extract_endpoint, Endpoint};
use crate::error::AppResult;
use crate::manifest::{PageManifest, PageManifestEntry};
use crate::render::PageRenderer;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Render model of one documentation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    /// Page title.
    pub title: String,
    /// Page introduction.
    pub description: String,
    /// Output file name relative to the output directory.
    pub filename: String,
    /// Endpoints in display order.
    pub endpoints: Vec<Endpoint>,
}

/// What to do when one page fails to build or render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure and return its error.
    #[default]
    Abort,
    /// Record the failure in the report and continue with the next page.
    SkipAndContinue,
}

/// Outcome of [`generate_pages`].
#[derive(Debug, Default, PartialEq)]
pub struct GenerationReport {
    /// Files written, in manifest order.
    pub written: Vec<PathBuf>,
    /// `(page name, error message)` for every skipped page.
    pub skipped: Vec<(String, String)>,
}

/// Builds the page model for one manifest entry.
///
/// Path references missing from the document are logged and left out.
pub fn build_page(ctx: &GenerationContext<'_>, entry: &PageManifestEntry) -> AppResult<PageModel> {
    let mut endpoints = Vec::with_capacity(entry.paths.len());

    for path_ref in entry.ordered_paths() {
        match extract_endpoint(ctx, path_ref)? {
            Some(endpoint) => endpoints.push(endpoint),
            None => tracing::warn!(
                page = %entry.name,
                method = %path_ref.method,
                path = %path_ref.path,
                "path not found in document, skipping"
            ),
        }
    }

    Ok(PageModel {
        title: entry.name.clone(),
        description: entry.description.clone(),
        filename: entry.output_filename.clone(),
        endpoints,
    })
}

/// Builds, renders and writes every page of `manifest`.
pub fn generate_pages<R: PageRenderer>(
    ctx: &GenerationContext<'_>,
    manifest: &PageManifest,
    renderer: &R,
    policy: FailurePolicy,
) -> AppResult<GenerationReport> {
    let mut report = GenerationReport::default();

    for entry in &manifest.pages {
        match generate_page(ctx, entry, renderer) {
            Ok(path) => {
                tracing::info!(page = %entry.name, file = %path.display(), "wrote page");
                report.written.push(path);
            }
            Err(e) => match policy {
                FailurePolicy::Abort => return Err(e),
                FailurePolicy::SkipAndContinue => {
                    tracing::warn!(page = %entry.name, error = %e, "skipping page");
                    report.skipped.push((entry.name.clone(), e.to_string()));
                }
            },
        }
    }

    Ok(report)
}

fn generate_page<R: PageRenderer>(
    ctx: &GenerationContext<'_>,
    entry: &PageManifestEntry,
    renderer: &R,
) -> AppResult<PathBuf> {
    let page = build_page(ctx, entry)?;
    let content = renderer.render(&page)?;
    write_page(ctx, &page.filename, &content)
}

/// Writes `content` to `<output dir>/<filename>`, creating parent directories.
pub fn write_page(ctx: &GenerationContext<'_>, filename: &str, content: &str) -> AppResult<PathBuf> {
    let path = ctx.output_dir().join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::oas::ApiDocument;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
openapi: 3.0.3
servers:
  - url: https://api.example.com
paths:
  /a:
    get: {responses: {}}
  /b:
    get: {responses: {}}
  /broken:
    get:
      parameters:
        - {name: q, in: query, example: 5}
      responses: {}
"#;

    struct TitleRenderer;

    impl PageRenderer for TitleRenderer {
        fn render(&self, page: &PageModel) -> AppResult<String> {
            Ok(format!("# {}\n", page.title))
        }
    }

    fn entry(name: &str, filename: &str, paths: &str) -> PageManifestEntry {
        serde_yaml::from_str(&format!(
            "name: {}\nfilename: {}\npaths: {}\n",
            name, filename, paths
        ))
        .unwrap()
    }

    #[test]
    fn test_build_page_orders_and_skips_missing() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let ctx = GenerationContext::new(&doc, "out");
        let page = build_page(
            &ctx,
            &entry(
                "Letters",
                "letters.md",
                "[{method: get, path: /b, index: 2}, {method: get, path: /missing, index: 0}, {method: get, path: /a, index: 1}]",
            ),
        )
        .unwrap();

        assert_eq!(page.title, "Letters");
        assert_eq!(page.filename, "letters.md");
        let paths: Vec<&str> = page.endpoints.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/a", "/b"]);
    }

    #[test]
    fn test_abort_stops_at_first_failure() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let ctx = GenerationContext::new(&doc, dir.path());
        let manifest = PageManifest {
            pages: vec![
                entry("First", "first.md", "[{method: get, path: /a}]"),
                entry("Broken", "broken.md", "[{method: get, path: /broken}]"),
                entry("Last", "last.md", "[{method: get, path: /b}]"),
            ],
        };

        let err = generate_pages(&ctx, &manifest, &TitleRenderer, FailurePolicy::Abort).unwrap_err();
        assert!(matches!(err, AppError::MalformedExample { .. }));
        assert!(dir.path().join("first.md").exists());
        assert!(!dir.path().join("broken.md").exists());
        assert!(!dir.path().join("last.md").exists());
    }

    #[test]
    fn test_skip_and_continue_reports() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let ctx = GenerationContext::new(&doc, dir.path());
        let manifest = PageManifest {
            pages: vec![
                entry("Broken", "broken.md", "[{method: get, path: /broken}]"),
                entry("Nested", "guide/nested.md", "[{method: get, path: /b}]"),
            ],
        };

        let report =
            generate_pages(&ctx, &manifest, &TitleRenderer, FailurePolicy::SkipAndContinue)
                .unwrap();
        assert_eq!(report.written, vec![dir.path().join("guide/nested.md")]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, "Broken");
        assert_eq!(
            fs::read_to_string(dir.path().join("guide/nested.md")).unwrap(),
            "# Nested\n"
        );
    }
}
