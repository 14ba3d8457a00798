#![deny(missing_docs)]

//! # Parameter Normalization
//!
//! Turns raw parameter definitions into [`Parameter`] records.

use crate::endpoint::models::{ParamLocation, Parameter};
use crate::error::{AppError, AppResult};
use crate::json::enum_json;
use crate::oas::shims::{ShimOperation, ShimParameter, ShimPathItem, ShimSchema};
use crate::oas::{ApiDocument, ExampleValue};
use std::borrow::Cow;
use std::collections::HashSet;
use utoipa::openapi::RefOr;

/// Resolves the effective parameter list of an operation.
///
/// Operation parameters come first in declaration order, followed by
/// path-level parameters that the operation does not redefine (same name and location).
pub fn collect_parameters(
    doc: &ApiDocument,
    path_item: &ShimPathItem,
    operation: &ShimOperation,
) -> AppResult<Vec<Parameter>> {
    let mut params = Vec::new();
    let mut seen = HashSet::new();

    for raw in &operation.parameters {
        let param = normalize_parameter(doc, raw)?;
        seen.insert((param.name.clone(), param.location.clone()));
        params.push(param);
    }

    for raw in &path_item.parameters {
        let param = normalize_parameter(doc, raw)?;
        if !seen.contains(&(param.name.clone(), param.location.clone())) {
            params.push(param);
        }
    }

    Ok(params)
}

/// Normalizes one (possibly referenced) parameter.
pub fn normalize_parameter(doc: &ApiDocument, raw: &RefOr<ShimParameter>) -> AppResult<Parameter> {
    let param = doc.resolve(raw)?;
    let schema: Cow<'_, ShimSchema> = match &param.schema {
        Some(schema) => doc.resolve(schema)?,
        None => Cow::Owned(ShimSchema::default()),
    };

    let example = parameter_example(&param)?;

    Ok(Parameter {
        name: param.name.clone(),
        location: ParamLocation::parse(&param.parameter_in),
        required: param.required,
        description: param.description.clone().unwrap_or_default(),
        ty: schema.type_name().unwrap_or_default().to_string(),
        format: schema.format.clone().unwrap_or_default(),
        example,
        enum_json: enum_json(schema.enum_values.as_deref())?,
        min_items: schema.min_items,
        max_items: schema.max_items,
        default: schema.default.clone(),
    })
}

/// Parameter examples are authored as `{value: "..."}`.
fn parameter_example(param: &ShimParameter) -> AppResult<String> {
    let location = || format!("parameter '{}' ({})", param.name, param.parameter_in);

    match ExampleValue::classify(param.example.as_ref()) {
        ExampleValue::Null => Ok(String::new()),
        ExampleValue::Object(map) => match map.get("value").map(ExampleValue::from) {
            None | Some(ExampleValue::Null) => Ok(String::new()),
            Some(ExampleValue::Text(text)) => Ok(text.to_string()),
            Some(other) => Err(AppError::malformed(
                location(),
                format!("example 'value' must be a string, got {}", other.kind()),
            )),
        },
        other => Err(AppError::malformed(
            location(),
            format!("example must be an object with a 'value' string, got {}", other.kind()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn doc() -> ApiDocument {
        ApiDocument::from_yaml(
            r#"
openapi: 3.0.3
paths:
  /widgets/{id}:
    parameters:
      - {name: id, in: path, required: true, schema: {type: string}, example: {value: "7"}}
      - {name: X-Trace, in: header, schema: {type: string}}
    get:
      parameters:
        - {name: id, in: path, required: true, schema: {type: integer}, example: {value: "42"}}
        - $ref: '#/components/parameters/Sort'
      responses: {}
components:
  parameters:
    Sort:
      name: sort
      in: query
      description: Sort order
      schema:
        type: array
        items: {type: string}
        enum: [asc, desc]
        minItems: 1
        maxItems: 2
        default: [asc]
      example: {value: "sort=asc"}
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_normalize_full_parameter() {
        let doc = doc();
        let raw: RefOr<ShimParameter> =
            serde_json::from_value(json!({"$ref": "#/components/parameters/Sort"})).unwrap();
        let param = normalize_parameter(&doc, &raw).unwrap();

        assert_eq!(
            param,
            Parameter {
                name: "sort".into(),
                location: ParamLocation::Query,
                required: false,
                description: "Sort order".into(),
                ty: "array".into(),
                format: String::new(),
                example: "sort=asc".into(),
                enum_json: "[&quot;asc&quot;,&quot;desc&quot;]".into(),
                min_items: Some(1),
                max_items: Some(2),
                default: Some(json!(["asc"])),
            }
        );
    }

    #[test]
    fn test_operation_params_override_path_params() {
        let doc = doc();
        let (item, op) = doc
            .operation("/widgets/{id}", crate::oas::HttpMethod::parse("get"))
            .unwrap();
        let params = collect_parameters(&doc, item, op.unwrap()).unwrap();

        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["id", "sort", "X-Trace"]);
        assert_eq!(params[0].example, "42");
        assert_eq!(params[0].ty, "integer");
    }

    #[test]
    fn test_missing_example_is_empty() {
        let doc = doc();
        let raw = RefOr::T(ShimParameter {
            name: "q".into(),
            parameter_in: "query".into(),
            description: None,
            required: false,
            schema: None,
            example: None,
        });
        let param = normalize_parameter(&doc, &raw).unwrap();
        assert_eq!(param.example, "");
        assert_eq!(param.ty, "");
        assert_eq!(param.enum_json, "");
    }

    #[test]
    fn test_scalar_example_is_malformed() {
        let doc = doc();
        let raw = RefOr::T(ShimParameter {
            name: "q".into(),
            parameter_in: "query".into(),
            description: None,
            required: false,
            schema: None,
            example: Some(json!("plain")),
        });
        let err = normalize_parameter(&doc, &raw).unwrap_err();
        assert!(matches!(err, AppError::MalformedExample { .. }));
    }

    #[test]
    fn test_non_string_value_is_malformed() {
        let doc = doc();
        let raw = RefOr::T(ShimParameter {
            name: "q".into(),
            parameter_in: "query".into(),
            description: None,
            required: false,
            schema: None,
            example: Some(json!({"value": 3})),
        });
        assert!(normalize_parameter(&doc, &raw).is_err());
    }
}
