//! Flattening of the loosely-typed rich text description structure.
//!
//! Event descriptions arrive as arbitrarily nested JSON: strings, arrays of
//! more description values, or objects wrapping a `sections` field. The
//! flattener concatenates every string it finds, in order, and never fails
//! on unexpected shapes.

use crate::utils::config::PARAGRAPH_MARKER;
use serde_json::Value;

/// Flatten a description value to plain text using the default paragraph marker
pub fn flatten_description(value: &Value) -> String {
    flatten_with_marker(value, PARAGRAPH_MARKER)
}

/// Flatten a description value, dropping lone strings equal to `marker`.
///
/// The marker rule exists because upstream appears to interleave bare HTML
/// tag names with the actual text; see [`PARAGRAPH_MARKER`].
pub fn flatten_with_marker(value: &Value, marker: &str) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) if s == marker => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| flatten_with_marker(item, marker))
            .collect(),
        Value::Object(map) => map
            .get("sections")
            .map(|sections| flatten_with_marker(sections, marker))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_plain_string() {
        assert_eq!(flatten_description(&json!("hello")), "hello");
    }

    #[test]
    fn test_flatten_null_and_scalars() {
        assert_eq!(flatten_description(&Value::Null), "");
        assert_eq!(flatten_description(&json!(42)), "");
        assert_eq!(flatten_description(&json!(true)), "");
    }

    #[test]
    fn test_flatten_nested_sections() {
        let desc = json!({
            "sections": [
                ["Opening ", "remarks"],
                { "sections": [" and ", "welcome"] }
            ]
        });
        assert_eq!(flatten_description(&desc), "Opening remarks and welcome");
    }

    #[test]
    fn test_flatten_object_without_sections() {
        assert_eq!(flatten_description(&json!({ "other": "text" })), "");
    }

    // The marker rule is an assumption about upstream data: bare "p" strings
    // are taken to be stray paragraph tags, not text.
    #[test]
    fn test_flatten_drops_paragraph_marker() {
        let desc = json!(["p", "actual text", "p"]);
        assert_eq!(flatten_description(&desc), "actual text");
    }

    #[test]
    fn test_flatten_marker_is_overridable() {
        let desc = json!(["p", "div", "text"]);
        assert_eq!(flatten_with_marker(&desc, "div"), "ptext");
    }
}
