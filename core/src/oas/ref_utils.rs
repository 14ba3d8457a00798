#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for turning `$ref` strings into JSON Pointers into the loaded document.
//!
//! Only local references (`#/...`) are supported; external documents are never fetched.

use percent_encoding::percent_decode_str;

/// Converts a local `$ref` into a JSON Pointer usable with [`serde_json::Value::pointer`].
///
/// Segments are percent-decoded; `~0`/`~1` escapes are left for `pointer` to handle.
/// Returns `None` for external references.
pub(crate) fn local_pointer(ref_str: &str) -> Option<String> {
    let fragment = ref_str.strip_prefix('#')?;
    if fragment.is_empty() {
        return Some(String::new());
    }
    if !fragment.starts_with('/') {
        return None;
    }

    let decoded: Vec<String> = fragment
        .split('/')
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect();
    Some(decoded.join("/"))
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded).decode_utf8_lossy().into_owned()
}

/// Last segment of a local `$ref`, decoded. Used for diagnostics.
pub(crate) fn ref_name(ref_str: &str) -> String {
    ref_str
        .rsplit('/')
        .next()
        .map(decode_pointer_segment)
        .unwrap_or_default()
}
