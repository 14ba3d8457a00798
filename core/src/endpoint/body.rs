#![deny(missing_docs)]

//! # Request Body Synthesis
//!
//! Flattens the JSON request body schema of an operation into
//! [`RequestBodyField`] records, and collects its named examples.

use crate::endpoint::models::{RequestBodyField, RequestExample};
use crate::error::AppResult;
use crate::json::{enum_json, escape_markup, is_json_text, to_pretty_json};
use crate::oas::shims::{ShimMediaType, ShimRequestBody, ShimSchema};
use crate::oas::{ApiDocument, ExampleValue};
use indexmap::IndexMap;
use serde_json::Value;

/// Selects the JSON media type of a request body.
///
/// Preference order:
/// 1. `application/json`
/// 2. `application/json` with parameters (e.g. `; charset=utf-8`)
/// 3. Any `+json` media type (e.g. `application/merge-patch+json`)
pub(crate) fn json_media(content: &IndexMap<String, ShimMediaType>) -> Option<&ShimMediaType> {
    if let Some(media) = content.get("application/json") {
        return Some(media);
    }

    let base = |key: &str| key.split(';').next().unwrap_or("").trim().to_ascii_lowercase();

    if let Some((_, media)) = content.iter().find(|(k, _)| base(k) == "application/json") {
        return Some(media);
    }

    content
        .iter()
        .find(|(k, _)| base(k).ends_with("+json"))
        .map(|(_, media)| media)
}

/// Builds one field per property of the JSON body schema, in declaration order.
///
/// Returns an empty list when there is no body, no JSON media type, or no schema.
pub fn synthesize_request_body(
    doc: &ApiDocument,
    body: Option<&ShimRequestBody>,
) -> AppResult<Vec<RequestBodyField>> {
    let Some(schema_ref) = body
        .and_then(|b| json_media(&b.content))
        .and_then(|media| media.schema.as_ref())
    else {
        return Ok(Vec::new());
    };

    let schema = doc.resolve(schema_ref)?;
    let mut fields = Vec::with_capacity(schema.properties.len());

    for (name, prop_ref) in &schema.properties {
        let prop = doc.resolve(prop_ref)?;
        let (example, example_json) = body_field_example(prop.example.as_ref())?;

        fields.push(RequestBodyField {
            name: name.clone(),
            ty: render_type(doc, &prop)?,
            format: prop.format.clone().unwrap_or_default(),
            example,
            example_json,
            description: prop.description.clone().unwrap_or_default(),
            required: schema.required.iter().any(|r| r == name),
            enum_json: enum_json(prop.enum_values.as_deref())?,
            default: prop.default.clone(),
            min_items: prop.min_items,
            max_items: prop.max_items,
        });
    }

    Ok(fields)
}

/// `array` types with a known item type render as `array[item]`.
fn render_type(doc: &ApiDocument, schema: &ShimSchema) -> AppResult<String> {
    let ty = schema.type_name().unwrap_or_default();
    if ty != "array" {
        return Ok(ty.to_string());
    }

    let item_type = match &schema.items {
        Some(items) => doc.resolve(items.as_ref())?.type_name().map(str::to_string),
        None => None,
    };

    Ok(match item_type {
        Some(item) => format!("array[{}]", item),
        None => "array".to_string(),
    })
}

/// Splits a property example into `(example, example_json)`; at most one is non-empty.
fn body_field_example(raw: Option<&Value>) -> AppResult<(String, String)> {
    Ok(match ExampleValue::classify(raw) {
        ExampleValue::Null => (String::new(), String::new()),
        ExampleValue::Text(text) if is_json_text(text) => (String::new(), escape_markup(text)),
        ExampleValue::Text(text) => (text.to_string(), String::new()),
        ExampleValue::Scalar(value) => (String::new(), escape_markup(&value.to_string())),
        ExampleValue::Array(_) | ExampleValue::Object(_) => {
            let compact = match raw {
                Some(value) => serde_json::to_string(value)?,
                None => String::new(),
            };
            (String::new(), escape_markup(&compact))
        }
    })
}

/// Collects the named examples of the JSON request body in declaration order.
pub fn collect_request_examples(
    doc: &ApiDocument,
    body: Option<&ShimRequestBody>,
) -> AppResult<Vec<RequestExample>> {
    let Some(media) = body.and_then(|b| json_media(&b.content)) else {
        return Ok(Vec::new());
    };

    let mut examples = Vec::with_capacity(media.examples.len());
    for (key, example_ref) in &media.examples {
        let example = doc.resolve(example_ref)?;
        let raw_value = example.value.clone().unwrap_or(Value::Null);
        let serialized_value = to_pretty_json(&raw_value)?;

        examples.push(RequestExample {
            key: key.clone(),
            summary: example.summary.clone(),
            description: example.description.clone(),
            raw_value,
            serialized_value,
        });
    }

    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::HttpMethod;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const DOC: &str = r#"
openapi: 3.0.3
paths:
  /widgets:
    post:
      requestBody:
        content:
          application/json:
            schema: {$ref: '#/components/schemas/NewWidget'}
            examples:
              curl:
                summary: Create
                value: {name: bolt}
              minimal:
                $ref: '#/components/examples/Minimal'
      responses: {}
    put:
      requestBody:
        content:
          text/plain:
            schema: {type: string}
      responses: {}
components:
  examples:
    Minimal:
      description: Smallest body
      value: {}
  schemas:
    Tag: {type: string}
    NewWidget:
      type: object
      required: [name, Tags]
      properties:
        name: {type: string, description: Widget name, example: bolt}
        config: {type: object, example: '{"torque": 5}'}
        tags:
          type: array
          items: {$ref: '#/components/schemas/Tag'}
          minItems: 1
        sizes: {type: array}
        count: {type: integer, format: int32, example: 3}
        meta: {type: object, example: {a: "<b>"}}
        kind: {type: string, enum: [a, b], default: a}
        code: {type: string, example: "3"}
        enabled: {type: boolean, example: true}
"#;

    fn body(doc: &ApiDocument, method: &str) -> ShimRequestBody {
        let (_, op) = doc.operation("/widgets", HttpMethod::parse(method)).unwrap();
        let body = op.unwrap().request_body.as_ref().unwrap();
        doc.resolve(body).unwrap().into_owned()
    }

    #[test]
    fn test_fields_in_declaration_order_with_types() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let body = body(&doc, "post");
        let fields = synthesize_request_body(&doc, Some(&body)).unwrap();

        let summary: Vec<(&str, &str, bool)> = fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.as_str(), f.required))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("name", "string", true),
                ("config", "object", false),
                ("tags", "array[string]", false),
                ("sizes", "array", false),
                ("count", "integer", false),
                ("meta", "object", false),
                ("kind", "string", false),
                ("code", "string", false),
                ("enabled", "boolean", false),
            ]
        );
        assert_eq!(fields[2].min_items, Some(1));
        assert_eq!(fields[4].format, "int32");
        assert_eq!(fields[6].enum_json, "[&quot;a&quot;,&quot;b&quot;]");
        assert_eq!(fields[6].default, Some(json!("a")));
    }

    #[test]
    fn test_example_and_example_json_are_exclusive() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let body = body(&doc, "post");
        let fields = synthesize_request_body(&doc, Some(&body)).unwrap();

        let name = &fields[0];
        assert_eq!((name.example.as_str(), name.example_json.as_str()), ("bolt", ""));

        let config = &fields[1];
        assert_eq!(config.example, "");
        assert_eq!(config.example_json, "{&quot;torque&quot;: 5}");

        let count = &fields[4];
        assert_eq!((count.example.as_str(), count.example_json.as_str()), ("", "3"));

        let meta = &fields[5];
        assert_eq!(meta.example, "");
        assert_eq!(meta.example_json, "{&quot;a&quot;:&quot;&lt;b&gt;&quot;}");

        for field in &fields {
            assert!(field.example.is_empty() || field.example_json.is_empty());
        }
    }

    #[test]
    fn test_numeric_and_textual_scalars_agree() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let body = body(&doc, "post");
        let fields = synthesize_request_body(&doc, Some(&body)).unwrap();

        let count = &fields[4];
        let code = &fields[7];
        assert_eq!(
            (count.example.as_str(), count.example_json.as_str()),
            (code.example.as_str(), code.example_json.as_str())
        );

        let enabled = &fields[8];
        assert_eq!(enabled.example, "");
        assert_eq!(enabled.example_json, "true");
    }

    #[test]
    fn test_non_json_body_is_skipped() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let body = body(&doc, "put");
        assert!(synthesize_request_body(&doc, Some(&body)).unwrap().is_empty());
        assert!(collect_request_examples(&doc, Some(&body)).unwrap().is_empty());
        assert!(synthesize_request_body(&doc, None).unwrap().is_empty());
    }

    #[test]
    fn test_collect_named_examples() {
        let doc = ApiDocument::from_yaml(DOC).unwrap();
        let body = body(&doc, "post");
        let examples = collect_request_examples(&doc, Some(&body)).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].key, "curl");
        assert_eq!(examples[0].summary, "Create");
        assert_eq!(examples[0].raw_value, json!({"name": "bolt"}));
        assert_eq!(examples[0].serialized_value, "{\n    \"name\": \"bolt\"\n}");
        assert_eq!(examples[1].key, "minimal");
        assert_eq!(examples[1].description, "Smallest body");
        assert_eq!(examples[1].serialized_value, "{}");
    }

    #[test]
    fn test_json_media_variants() {
        let mut content = IndexMap::new();
        content.insert(
            "application/merge-patch+json".to_string(),
            ShimMediaType {
                schema: None,
                examples: IndexMap::new(),
            },
        );
        assert!(json_media(&content).is_some());

        let mut plain = IndexMap::new();
        plain.insert(
            "text/plain".to_string(),
            ShimMediaType {
                schema: None,
                examples: IndexMap::new(),
            },
        );
        assert!(json_media(&plain).is_none());
    }
}
