//! # Configuration
//!
//! Resolves command line arguments into concrete paths. Conventional layout:
//!
//! ```text
//! <schemas-dir>/<name>/schema.yaml
//! <schemas-dir>/<name>/pages.yaml
//! src/<name>/
//! ```

use std::path::PathBuf;

use apidocs_core::FailurePolicy;

use crate::generate::GenerateArgs;

/// Fully resolved settings of one `generate` run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    /// OpenAPI document.
    pub schema_path: PathBuf,
    /// Page manifest.
    pub pages_path: PathBuf,
    /// Directory pages are written to.
    pub output_dir: PathBuf,
    /// Optional replacement page template.
    pub template: Option<PathBuf>,
    /// What to do when a page fails.
    pub policy: FailurePolicy,
}

impl GenerateConfig {
    /// Applies the conventional layout to every path not given explicitly.
    pub fn from_args(args: &GenerateArgs) -> Self {
        let api_dir = args.schemas_dir.join(&args.name);

        Self {
            schema_path: args
                .schema
                .clone()
                .unwrap_or_else(|| api_dir.join("schema.yaml")),
            pages_path: args
                .pages
                .clone()
                .unwrap_or_else(|| api_dir.join("pages.yaml")),
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("src").join(&args.name)),
            template: args.template.clone(),
            policy: policy_for(args.keep_going),
        }
    }
}

/// `--keep-going` skips failing pages instead of aborting.
pub fn policy_for(keep_going: bool) -> FailurePolicy {
    if keep_going {
        FailurePolicy::SkipAndContinue
    } else {
        FailurePolicy::Abort
    }
}
