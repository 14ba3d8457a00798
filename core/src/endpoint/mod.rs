#![deny(missing_docs)]

//! # Endpoint Extraction
//!
//! Builds one [`Endpoint`] per manifest path reference.
//!
//! - **params**: parameter normalization.
//! - **body**: request body fields and named request examples.
//! - **servers**: base URL resolution.
//! - **responses**: vendor-extension response examples.
//! - **models**: the resulting value objects.

pub mod body;
pub mod models;
pub mod params;
pub mod responses;
pub mod servers;

pub use models::{
    Endpoint, ParamLocation, Parameter, RequestBodyField, RequestExample, ResponseExample,
    ResponseExamples,
};

use crate::command::{synthesize_command, CommandInput};
use crate::context::GenerationContext;
use crate::error::AppResult;
use crate::manifest::PathRef;
use crate::oas::HttpMethod;
use std::collections::BTreeMap;

/// Extracts the endpoint referenced by `path_ref`.
///
/// Returns `Ok(None)` when the path does not exist in the document. A path
/// that exists without the requested (or a supported) method yields an
/// endpoint with no parameters, body or examples.
pub fn extract_endpoint(
    ctx: &GenerationContext<'_>,
    path_ref: &PathRef,
) -> AppResult<Option<Endpoint>> {
    let doc = ctx.document();
    let method = HttpMethod::parse(&path_ref.method);
    let Some((path_item, operation)) = doc.operation(&path_ref.path, method) else {
        return Ok(None);
    };
    let method_name = path_ref.method.trim().to_ascii_lowercase();
    let location = format!("{} {}", method_name.to_ascii_uppercase(), path_ref.path);

    // 1. Parameters
    let params = match operation {
        Some(op) => params::collect_parameters(doc, path_item, op)?,
        None => Vec::new(),
    };

    let mut parameters_by_location: BTreeMap<String, Vec<Parameter>> = BTreeMap::new();
    let mut query_params = Vec::new();
    let mut header_params = Vec::new();
    let mut path_params = Vec::new();
    for param in params {
        match param.location {
            ParamLocation::Query => query_params.push(param.clone()),
            ParamLocation::Header => header_params.push(param.clone()),
            ParamLocation::Path => path_params.push(param.clone()),
            ParamLocation::Cookie | ParamLocation::Other(_) => {}
        }
        parameters_by_location
            .entry(param.location.to_string())
            .or_default()
            .push(param);
    }

    // 2. Request body
    let request_body = match operation.and_then(|op| op.request_body.as_ref()) {
        Some(body) => Some(doc.resolve(body)?),
        None => None,
    };
    let request_body_fields = body::synthesize_request_body(doc, request_body.as_deref())?;
    let request_examples = body::collect_request_examples(doc, request_body.as_deref())?;

    // 3. Server
    let server = servers::resolve_server(ctx.default_server(), Some(path_item), operation);

    // 4. Command
    let synthesized_command = synthesize_command(
        ctx.command_target(),
        CommandInput {
            method: &method_name,
            server: &server,
            path: &path_ref.path,
            header_params: &header_params,
            query_params: &query_params,
            path_params: &path_params,
            request_examples: &request_examples,
        },
    )?;

    // 5. Responses
    let response_examples = match operation {
        Some(op) => responses::extract_response_examples(doc, op, &location)?,
        None => ResponseExamples::default(),
    };

    tracing::debug!(
        endpoint = %location,
        params = query_params.len() + header_params.len() + path_params.len(),
        body_fields = request_body_fields.len(),
        response_examples = response_examples.success.len() + response_examples.error.len(),
        "extracted endpoint"
    );

    Ok(Some(Endpoint {
        server,
        path: path_ref.path.clone(),
        method: method_name,
        display_index: path_ref.display_index,
        operation_id: operation.and_then(|op| op.operation_id.clone()),
        summary: operation
            .and_then(|op| op.summary.clone())
            .unwrap_or_default(),
        description: operation
            .and_then(|op| op.description.clone())
            .unwrap_or_default(),
        tags: operation.map(|op| op.tags.clone()).unwrap_or_default(),
        deprecated: operation.is_some_and(|op| op.deprecated),
        parameters_by_location,
        query_params,
        header_params,
        path_params,
        request_body_fields,
        request_examples,
        response_example_keys: response_examples.all_keys(),
        success_example_keys: response_examples.success_keys(),
        error_example_keys: response_examples.error_keys(),
        response_examples_success: response_examples.success,
        response_examples_error: response_examples.error,
        synthesized_command,
    }))
}
