//! # Command Synthesis
//!
//! Builds the example request shown next to each operation:
//!
//! ```text
//! curl -X POST 'https://api.example.com/widgets/42' \
//!     -H 'Authorization: Bearer <token>' \
//!     -G \
//!     -d 'dry_run=true' \
//!     -d@- <<EOF
//! {
//!     "name": "bolt"
//! }
//! EOF
//! ```
//!
//! A continuation backslash is written only between lines, never after the last one.

use crate::endpoint::models::{Parameter, RequestExample};
use crate::error::AppResult;
use crate::json::to_pretty_json;

/// Separator between two command lines.
const CONTINUATION: &str = " \\\n    ";

/// Tool a command is synthesized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandTarget {
    /// `curl`
    #[default]
    Curl,
}

impl CommandTarget {
    /// Key of the request example embedded as the body for this target.
    pub fn example_key(&self) -> &'static str {
        match self {
            CommandTarget::Curl => "curl",
        }
    }
}

/// An example invocation under construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Command {
    target: CommandTarget,
    method: String,
    server: String,
    path: String,
    headers: Vec<String>,
    query_params: Vec<String>,
    body: Option<String>,
}

impl Command {
    /// Starts a command for `METHOD 'server+path'`.
    pub fn new(target: CommandTarget, method: &str, server: &str, path: &str) -> Self {
        Self {
            target,
            method: method.to_ascii_uppercase(),
            server: server.to_string(),
            path: path.to_string(),
            ..Default::default()
        }
    }

    /// Adds header lines; empty examples are skipped when rendering.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(Into::into));
        self
    }

    /// Adds query lines; empty examples are skipped when rendering but still
    /// trigger the `-G` marker.
    pub fn query_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Sets the heredoc body; blank bodies are ignored.
    pub fn body(mut self, body: Option<String>) -> Self {
        self.body = body.filter(|b| !b.trim().is_empty());
        self
    }

    /// Renders the command text.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        match self.target {
            CommandTarget::Curl => {
                lines.push(format!("curl -X {} '{}{}'", self.method, self.server, self.path));

                lines.extend(
                    self.headers
                        .iter()
                        .filter(|h| !h.is_empty())
                        .map(|h| format!("-H '{}'", h)),
                );

                if !self.query_params.is_empty() {
                    lines.push("-G".to_string());
                    lines.extend(
                        self.query_params
                            .iter()
                            .filter(|q| !q.is_empty())
                            .map(|q| format!("-d '{}'", q)),
                    );
                }

                if let Some(body) = &self.body {
                    lines.push(format!("-d@- <<EOF\n{}\nEOF", body.trim()));
                }
            }
        }

        lines.join(CONTINUATION)
    }
}

/// Replaces `:name` (or `{name}`) path segments with the example of the path
/// parameter of the same name, even when that example is empty. Placeholders
/// naming no declared path parameter stay as they are.
pub fn substitute_path_params(path: &str, path_params: &[Parameter]) -> String {
    path.split('/')
        .map(|segment| {
            let name = segment
                .strip_prefix(':')
                .or_else(|| segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')));
            name.and_then(|name| {
                path_params
                    .iter()
                    .find(|p| p.name == name)
            })
            .map(|p| p.example.as_str())
            .unwrap_or(segment)
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Inputs of [`synthesize_command`], borrowed from a partially built endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CommandInput<'a> {
    /// HTTP method, any case.
    pub method: &'a str,
    /// Resolved base URL.
    pub server: &'a str,
    /// Path template.
    pub path: &'a str,
    /// Header parameters; their examples are full `Name: value` lines.
    pub header_params: &'a [Parameter],
    /// Query parameters; their examples are `name=value` pairs.
    pub query_params: &'a [Parameter],
    /// Path parameters used for placeholder substitution.
    pub path_params: &'a [Parameter],
    /// Named request examples; the one keyed for the target becomes the body.
    pub request_examples: &'a [RequestExample],
}

/// Synthesizes the example command of one endpoint.
pub fn synthesize_command(target: CommandTarget, input: CommandInput<'_>) -> AppResult<String> {
    let body = input
        .request_examples
        .iter()
        .find(|e| e.key == target.example_key())
        .map(|e| to_pretty_json(&e.raw_value))
        .transpose()?;

    let path = substitute_path_params(input.path, input.path_params);
    let command = Command::new(target, input.method, input.server, &path)
        .headers(input.header_params.iter().map(|p| p.example.clone()))
        .query_params(input.query_params.iter().map(|p| p.example.clone()))
        .body(body);

    Ok(command.render())
}
