//! Value model shared by every helper.
//!
//! `serde_json::Value` already is the tagged union the helpers need:
//! scalars (`Null`, `Bool`, `Number`, `String`), sequences (`Array`) and
//! mappings (`Object`). Integer keys are stored stringified, so `3` and
//! `"3"` address the same entry.

use serde_json::{Map, Value as JsonValue};

/// Alias for every value handled by the helpers.
pub type Value = JsonValue;

/// Alias for an associative container of values.
pub type Mapping = Map<String, Value>;


/// Normalise a key to the stringified form used inside a `Mapping`.
pub fn key_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(true) => "1".into(),
        Value::Bool(false) => String::new(),
        other => other.to_string(),
    }
}


/// Parse a segment as a sequence index.
///
/// Only plain decimal digits qualify; `"+1"` and `"01"` stay keys.
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}


/// True if `value` can be descended into by a path segment.
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}


/// Convert a sequence into a mapping keyed by its stringified indices.
pub fn sequence_to_mapping(items: Vec<Value>) -> Mapping {
    items
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i.to_string(), v))
        .collect()
}


/// Iterate the `(key, value)` entries of a container.
///
/// Sequences yield their stringified indices; scalars yield nothing.
pub fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}
