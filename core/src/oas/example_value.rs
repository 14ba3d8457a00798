//! # Example Values
//!
//! A tagged view over raw example payloads so each extraction step matches on
//! the shape it got instead of assuming one.

use serde_json::{Map, Value};

/// The shape of a raw example value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExampleValue<'a> {
    /// Absent or `null`.
    Null,
    /// A string.
    Text(&'a str),
    /// A number or boolean.
    Scalar(&'a Value),
    /// A list.
    Array(&'a [Value]),
    /// A map.
    Object(&'a Map<String, Value>),
}

impl<'a> ExampleValue<'a> {
    /// Classifies an optional raw value; `None` is treated as `Null`.
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => ExampleValue::Null,
            Some(Value::String(s)) => ExampleValue::Text(s),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => ExampleValue::Scalar(v),
            Some(Value::Array(items)) => ExampleValue::Array(items),
            Some(Value::Object(map)) => ExampleValue::Object(map),
        }
    }

    /// Human readable shape name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ExampleValue::Null => "null",
            ExampleValue::Text(_) => "string",
            ExampleValue::Scalar(_) => "scalar",
            ExampleValue::Array(_) => "array",
            ExampleValue::Object(_) => "object",
        }
    }
}

impl<'a> From<&'a Value> for ExampleValue<'a> {
    fn from(value: &'a Value) -> Self {
        ExampleValue::classify(Some(value))
    }
}
