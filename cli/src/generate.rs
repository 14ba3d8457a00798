#![deny(missing_docs)]

//! # Generate Command
//!
//! Renders every page of a manifest into the output directory.

use std::fs;
use std::path::PathBuf;

use apidocs_core::{
    generate_pages, ApiDocument, AppError, AppResult, GenerationContext,
    HandlebarsRenderer, PageManifest,
};

use crate::config::GenerateConfig;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Name of the API; selects `<schemas-dir>/<name>/` and `src/<name>/`.
    #[clap(long)]
    pub name: String,

    /// Directory holding one sub-directory per API.
    #[clap(long, env = "APIDOCS_SCHEMAS_DIR", default_value = "schemas")]
    pub schemas_dir: PathBuf,

    /// OpenAPI document. Defaults to `<schemas-dir>/<name>/schema.yaml`.
    #[clap(long)]
    pub schema: Option<PathBuf>,

    /// Page manifest. Defaults to `<schemas-dir>/<name>/pages.yaml`.
    #[clap(long)]
    pub pages: Option<PathBuf>,

    /// Output directory. Defaults to `src/<name>/`.
    #[clap(long, env = "APIDOCS_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Handlebars page template replacing the built-in Markdown one.
    #[clap(long, env = "APIDOCS_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Report failing pages and continue instead of stopping at the first one.
    #[clap(long)]
    pub keep_going: bool,
}

/// Executes the generation.
pub fn execute(config: &GenerateConfig) -> AppResult<()> {
    // 1. Inputs
    let document = ApiDocument::load(&config.schema_path)?;
    let manifest = PageManifest::load(&config.pages_path)?;
    let renderer = match &config.template {
        Some(path) => HandlebarsRenderer::from_file(path)?,
        None => HandlebarsRenderer::new()?,
    };
    tracing::info!(
        schema = %config.schema_path.display(),
        pages = manifest.pages.len(),
        "loaded inputs"
    );

    // 2. Output
    fs::create_dir_all(&config.output_dir)?;
    let ctx = GenerationContext::new(&document, &config.output_dir);
    let report = generate_pages(&ctx, &manifest, &renderer, config.policy)?;

    println!(
        "Generated {} page(s) in {:?}",
        report.written.len(),
        config.output_dir
    );

    if report.skipped.is_empty() {
        Ok(())
    } else {
        Err(AppError::General(format!(
            "{} page(s) failed: {}",
            report.skipped.len(),
            report
                .skipped
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}
