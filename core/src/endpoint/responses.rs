#![deny(missing_docs)]

//! # Response Examples
//!
//! Extracts vendor-extension response examples, split into success (200-399)
//! and error (400-599) classes.
//!
//! Each response may carry `x-` extensions shaped like:
//!
//! ```yaml
//! x-examples:
//!   created:
//!     summary: A new widget
//!     value: {id: 1}
//! ```
//!
//! Every top-level key becomes one [`ResponseExample`]. Both class lists are
//! sorted by key, so output never depends on map iteration order.

use crate::endpoint::models::{ResponseExample, ResponseExamples};
use crate::error::{AppError, AppResult};
use crate::json::to_pretty_json;
use crate::oas::shims::ShimOperation;
use crate::oas::{ApiDocument, ExampleValue};
use serde_json::Value;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

const SUCCESS_CODES: RangeInclusive<u16> = 200..=399;
const ERROR_CODES: RangeInclusive<u16> = 400..=599;

/// Extracts both example classes of `operation`.
pub fn extract_response_examples(
    doc: &ApiDocument,
    operation: &ShimOperation,
    location: &str,
) -> AppResult<ResponseExamples> {
    Ok(ResponseExamples {
        success: extract_class(doc, operation, SUCCESS_CODES, location)?,
        error: extract_class(doc, operation, ERROR_CODES, location)?,
    })
}

fn extract_class(
    doc: &ApiDocument,
    operation: &ShimOperation,
    codes: RangeInclusive<u16>,
    location: &str,
) -> AppResult<Vec<ResponseExample>> {
    let mut examples = Vec::new();

    for code in codes {
        let Some(response_ref) = operation.responses.responses.get(code.to_string().as_str())
        else {
            continue;
        };
        let response = doc.resolve(response_ref)?;
        let where_ = format!("{} response {}", location, code);

        let extensions: BTreeMap<&str, &Value> = response
            .extensions
            .iter()
            .flat_map(|ext| ext.iter())
            .filter(|(key, _)| key.starts_with("x-"))
            .map(|(key, value)| (key.as_str(), value))
            .collect();

        for (extension, raw) in extensions {
            let ExampleValue::Object(entries) = ExampleValue::from(raw) else {
                return Err(AppError::malformed(
                    &where_,
                    format!(
                        "extension '{}' must be a map of examples, got {}",
                        extension,
                        ExampleValue::from(raw).kind()
                    ),
                ));
            };

            for (key, entry) in entries {
                examples.push(response_example(code, key, entry, &where_)?);
            }
        }
    }

    // Stable: equal keys keep status-code order.
    examples.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(examples)
}

fn response_example(
    status_code: u16,
    key: &str,
    entry: &Value,
    location: &str,
) -> AppResult<ResponseExample> {
    let ExampleValue::Object(fields) = ExampleValue::from(entry) else {
        return Err(AppError::malformed(
            location,
            format!(
                "example '{}' must be an object, got {}",
                key,
                ExampleValue::from(entry).kind()
            ),
        ));
    };

    let summary = match fields.get("summary").map(ExampleValue::from) {
        None | Some(ExampleValue::Null) => String::new(),
        Some(ExampleValue::Text(text)) => text.to_string(),
        Some(other) => {
            return Err(AppError::malformed(
                location,
                format!("summary of '{}' must be a string, got {}", key, other.kind()),
            ))
        }
    };

    let serialized_value = match fields.get("value") {
        Some(value) => to_pretty_json(value)?,
        None => String::new(),
    };

    Ok(ResponseExample {
        status_code,
        key: key.to_string(),
        summary,
        serialized_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::HttpMethod;
    use pretty_assertions::assert_eq;

    fn operation(doc: &ApiDocument) -> ShimOperation {
        let (_, op) = doc.operation("/widgets", HttpMethod::parse("get")).unwrap();
        op.unwrap().clone()
    }

    const DOC: &str = r#"
openapi: 3.0.3
paths:
  /widgets:
    get:
      responses:
        200:
          description: OK
          x-examples:
            zeta: {summary: Last, value: {id: 9}}
            alpha: {summary: First, value: [1, 2]}
        201:
          $ref: '#/components/responses/Created'
        404:
          description: Missing
          x-examples:
            not_found: {value: {error: missing}}
        500:
          description: Boom
          x-examples:
            crash: {summary: Crash}
        default:
          description: Ignored
          x-examples:
            ignored: {value: 1}
components:
  responses:
    Created:
      description: Created
      x-examples:
        beta: {summary: Made}
"#;

    #[test]
    fn test_split_and_sorted() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let op = operation(&doc);
        let examples = extract_response_examples(&doc, &op, "GET /widgets").unwrap();

        let success: Vec<(u16, &str)> = examples
            .success
            .iter()
            .map(|e| (e.status_code, e.key.as_str()))
            .collect();
        assert_eq!(success, vec![(200, "alpha"), (201, "beta"), (200, "zeta")]);

        let error: Vec<(u16, &str)> = examples
            .error
            .iter()
            .map(|e| (e.status_code, e.key.as_str()))
            .collect();
        assert_eq!(error, vec![(500, "crash"), (404, "not_found")]);

        assert_eq!(examples.success_keys(), "alpha,beta,zeta");
        assert_eq!(examples.error_keys(), "crash,not_found");
        assert_eq!(examples.all_keys(), "alpha,beta,zeta,crash,not_found");
    }

    #[test]
    fn test_example_fields() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let op = operation(&doc);
        let examples = extract_response_examples(&doc, &op, "GET /widgets").unwrap();

        let alpha = &examples.success[0];
        assert_eq!(alpha.summary, "First");
        assert_eq!(alpha.serialized_value, "[\n    1,\n    2\n]");

        let crash = &examples.error[0];
        assert_eq!(crash.summary, "Crash");
        assert_eq!(crash.serialized_value, "");
    }

    #[test]
    fn test_non_map_extension_is_fatal() {
        let doc = ApiDocument::from_yaml(
            r#"
openapi: 3.0.3
paths:
  /widgets:
    get:
      responses:
        200:
          description: OK
          x-examples: [1, 2]
"#,
        )
        .unwrap();
        let op = operation(&doc);
        let err = extract_response_examples(&doc, &op, "GET /widgets").unwrap_err();
        assert!(matches!(err, AppError::MalformedExample { .. }));
    }

    #[test]
    fn test_non_map_entry_is_fatal() {
        let doc = ApiDocument::from_yaml(
            r#"
openapi: 3.0.3
paths:
  /widgets:
    get:
      responses:
        400:
          description: Bad
          x-examples:
            bad: "just a string"
"#,
        )
        .unwrap();
        let op = operation(&doc);
        let err = extract_response_examples(&doc, &op, "GET /widgets").unwrap_err();
        assert!(err.to_string().contains("GET /widgets response 400"));
    }

    #[test]
    fn test_no_responses() {
        let doc = ApiDocument::from_yaml(
            "openapi: 3.0.3\npaths:\n  /widgets:\n    get:\n      responses: {}\n",
        )
        .unwrap();
        let op = operation(&doc);
        let examples = extract_response_examples(&doc, &op, "GET /widgets").unwrap();
        assert_eq!(examples, ResponseExamples::default());
    }
}
