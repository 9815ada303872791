//! Comparison helpers: key and value differences between mappings.

use crate::types::value::{Mapping, Value};


/// Entries of `a` that are missing from `b` or hold a different value.
///
/// Nested mappings on both sides are compared recursively and only their
/// differing leaves are kept; a nested mapping with no differences is
/// dropped entirely.
pub fn diff(a: &Mapping, b: &Mapping) -> Mapping {
    let mut out = Mapping::new();
    for (key, left) in a {
        match (left, b.get(key)) {
            (_, None) => {
                out.insert(key.clone(), left.clone());
            }
            (Value::Object(inner_a), Some(Value::Object(inner_b))) => {
                let nested = diff(inner_a, inner_b);
                if !nested.is_empty() {
                    out.insert(key.clone(), Value::Object(nested));
                }
            }
            (_, Some(right)) if left != right => {
                out.insert(key.clone(), left.clone());
            }
            _ => {}
        }
    }
    out
}


/// Entries of `a` whose key is absent from `b`, values ignored.
pub fn diff_keys(a: &Mapping, b: &Mapping) -> Mapping {
    a.iter()
        .filter(|(k, _)| !b.contains_key(k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}


/// Entries of `a` whose key is present in `b`, values taken from `a`.
pub fn intersect_keys(a: &Mapping, b: &Mapping) -> Mapping {
    a.iter()
        .filter(|(k, _)| b.contains_key(k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}


/// True for a mapping whose keys are not exactly `"0".."n-1"`.
///
/// Sequences and scalars are never associative. An empty mapping is a list.
pub fn is_assoc(value: &Value) -> bool {
    match value {
        Value::Object(map) => !has_index_keys(map),
        _ => false,
    }
}


/// True for a sequence or a mapping keyed exactly `"0".."n-1"`.
pub fn is_list(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(map) => has_index_keys(map),
        _ => false,
    }
}


fn has_index_keys(map: &Mapping) -> bool {
    (0..map.len()).all(|i| map.contains_key(i.to_string().as_str()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Mapping {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn diff_keeps_changed_and_missing() {
        let a = obj(json!({"a": 1, "b": 2, "c": 3}));
        let b = obj(json!({"a": 1, "b": 20}));
        assert_eq!(Value::Object(diff(&a, &b)), json!({"b": 2, "c": 3}));
    }

    #[test]
    fn diff_recurses_into_mappings() {
        let a = obj(json!({"db": {"host": "h", "port": 5432}, "same": {"x": 1}}));
        let b = obj(json!({"db": {"host": "h", "port": 6543}, "same": {"x": 1}}));
        assert_eq!(Value::Object(diff(&a, &b)), json!({"db": {"port": 5432}}));
    }

    #[test]
    fn diff_mapping_against_scalar() {
        let a = obj(json!({"k": {"x": 1}}));
        let b = obj(json!({"k": 1}));
        assert_eq!(Value::Object(diff(&a, &b)), json!({"k": {"x": 1}}));
    }

    #[test]
    fn diff_with_self_is_empty() {
        let a = obj(json!({"a": [1, 2], "b": {"c": null}}));
        assert!(diff(&a, &a).is_empty());
    }

    #[test]
    fn key_set_operations() {
        let a = obj(json!({"a": 1, "b": 2, "c": 3}));
        let b = obj(json!({"b": 0, "d": 0}));
        assert_eq!(Value::Object(diff_keys(&a, &b)), json!({"a": 1, "c": 3}));
        assert_eq!(Value::Object(intersect_keys(&a, &b)), json!({"b": 2}));
    }

    #[test]
    fn assoc_and_list_detection() {
        assert!(is_list(&json!([1, 2])));
        assert!(is_list(&json!({"0": "a", "1": "b"})));
        assert!(is_list(&json!({})));
        assert!(!is_list(&json!({"1": "a"})));
        assert!(!is_list(&json!("x")));

        assert!(is_assoc(&json!({"name": "x"})));
        assert!(is_assoc(&json!({"0": "a", "2": "b"})));
        assert!(!is_assoc(&json!({"0": "a"})));
        assert!(!is_assoc(&json!([1])));
    }
}
