//! # JSON Helpers
//!
//! Serialization helpers shared by the extraction steps.

use crate::error::AppResult;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Indentation used for every pretty-printed example.
const INDENT: &[u8] = b"    ";

/// Serializes `value` as JSON indented with four spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Permissive check for "is this JSON text?".
///
/// Anything `serde_json` accepts counts, including bare numbers and booleans.
pub fn is_json_text(text: &str) -> bool {
    !text.trim().is_empty() && serde_json::from_str::<Value>(text).is_ok()
}

/// Escapes `text` for embedding inside markup attributes or content.
pub fn escape_markup(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}

/// Compact JSON array of `values`, escaped for markup. Empty input yields `""`.
pub fn enum_json(values: Option<&[Value]>) -> AppResult<String> {
    match values {
        Some(values) if !values.is_empty() => {
            let compact = serde_json::to_string(values)?;
            Ok(escape_markup(&compact))
        }
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_four_space_indent() {
        let out = to_pretty_json(&json!({"a": [1]})).unwrap();
        assert_eq!(out, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_is_json_text() {
        assert!(is_json_text(r#"{"a": 1}"#));
        assert!(is_json_text("[1, 2]"));
        assert!(is_json_text("42"));
        assert!(!is_json_text("hello"));
        assert!(!is_json_text(""));
    }

    #[test]
    fn test_enum_json_escaped() {
        let values = vec![json!("a"), json!("b")];
        assert_eq!(
            enum_json(Some(values.as_slice())).unwrap(),
            "[&quot;a&quot;,&quot;b&quot;]"
        );
        assert_eq!(enum_json(Some(&[][..])).unwrap(), "");
        assert_eq!(enum_json(None).unwrap(), "");
    }
}
