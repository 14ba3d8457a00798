//! # Server Resolution
//!
//! Picks the base URL shown for an operation. At every level the last declared
//! server wins; the document normally declares exactly one.

use crate::oas::shims::{ShimOperation, ShimPathItem, ShimServer};

/// Base URL from the document-level server list, or `""` when there is none.
pub fn default_server(servers: &[ShimServer]) -> String {
    last_server(servers).unwrap_or_default()
}

/// Effective base URL: operation servers, then path-item servers, then `default`.
///
/// An override list that is declared but empty does not override.
pub fn resolve_server(
    default: &str,
    path_item: Option<&ShimPathItem>,
    operation: Option<&ShimOperation>,
) -> String {
    operation
        .and_then(|op| op.servers.as_deref())
        .and_then(last_server)
        .or_else(|| {
            path_item
                .and_then(|item| item.servers.as_deref())
                .and_then(last_server)
        })
        .unwrap_or_else(|| default.to_string())
}

fn last_server(servers: &[ShimServer]) -> Option<String> {
    servers.last().map(expand_url)
}

/// Substitutes `{variable}` templates with their declared defaults.
fn expand_url(server: &ShimServer) -> String {
    server
        .variables
        .iter()
        .fold(server.url.clone(), |url, (name, var)| {
            url.replace(&format!("{{{}}}", name), &var.default)
        })
}
