//! # Generation Context
//!
//! Everything a generation run shares across pages, built once and passed by
//! reference to every step.

use crate::command::CommandTarget;
use crate::endpoint::servers::default_server;
use crate::oas::ApiDocument;
use std::path::{Path, PathBuf};

/// Read-only state of one generation run.
pub struct GenerationContext<'a> {
    document: &'a ApiDocument,
    default_server: String,
    output_dir: PathBuf,
    command_target: CommandTarget,
}

impl<'a> GenerationContext<'a> {
    /// Creates a context; the document default server is resolved here, once.
    pub fn new(document: &'a ApiDocument, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            document,
            default_server: default_server(document.servers()),
            output_dir: output_dir.into(),
            command_target: CommandTarget::default(),
        }
    }

    /// Overrides the tool example commands are written for.
    pub fn with_command_target(mut self, target: CommandTarget) -> Self {
        self.command_target = target;
        self
    }

    /// The specification document.
    pub fn document(&self) -> &'a ApiDocument {
        self.document
    }

    /// Base URL used when an operation declares no override.
    pub fn default_server(&self) -> &str {
        &self.default_server
    }

    /// Directory page files are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Tool example commands are written for.
    pub fn command_target(&self) -> CommandTarget {
        self.command_target
    }
}
