//! Flattening helpers: nested containers to flat lists and dot-keyed maps.

use crate::path::accessor::set_with;
use crate::path::segments::DEFAULT_DELIMITER;
use crate::types::value::{entries, is_container, Mapping, Value};


/// Collect the leaf values of nested containers into one sequence.
///
/// `depth = None` flattens completely; `Some(1)` lifts the values of
/// directly nested containers and keeps anything deeper as-is.
pub fn flatten(value: &Value, depth: Option<usize>) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(value, depth, &mut out);
    out
}

fn flatten_into(value: &Value, depth: Option<usize>, out: &mut Vec<Value>) {
    for (_, item) in entries(value) {
        if !is_container(item) {
            out.push(item.clone());
            continue;
        }
        match depth {
            Some(d) if d <= 1 => out.extend(entries(item).into_iter().map(|(_, v)| v.clone())),
            Some(d) => flatten_into(item, Some(d - 1), out),
            None => flatten_into(item, None, out),
        }
    }
}


/// Concatenate the containers inside `items` one level deep.
///
/// Scalar elements are skipped.
pub fn collapse(items: &Value) -> Vec<Value> {
    entries(items)
        .into_iter()
        .filter(|(_, item)| is_container(item))
        .flat_map(|(_, item)| entries(item).into_iter().map(|(_, v)| v.clone()).collect::<Vec<_>>())
        .collect()
}


/// Flatten a nested mapping into `path -> leaf` entries joined with `.`.
///
/// Empty containers are leaves and survive as `{}` / `[]`.
pub fn dot(mapping: &Mapping) -> Mapping {
    dot_with(mapping, DEFAULT_DELIMITER)
}

pub fn dot_with(mapping: &Mapping, delimiter: &str) -> Mapping {
    let mut out = Mapping::new();
    for (key, value) in mapping {
        dot_into(value, key, delimiter, &mut out);
    }
    out
}

/// `prefix` is the full path of `value`, top-level key included; an empty
/// prefix is the `""` key, so children are always joined with `delimiter`.
fn dot_into(value: &Value, prefix: &str, delimiter: &str, out: &mut Mapping) {
    let children = entries(value);
    if children.is_empty() {
        out.insert(prefix.to_string(), value.clone());
        return;
    }
    for (key, child) in children {
        let path = format!("{}{}{}", prefix, delimiter, key);
        dot_into(child, &path, delimiter, out);
    }
}


/// Expand `path -> value` entries back into a nested mapping.
///
/// Index segments come back as mapping keys, so sequences flattened by
/// `dot` return as `{"0": .., "1": ..}`.
pub fn undot(mapping: &Mapping) -> Mapping {
    undot_with(mapping, DEFAULT_DELIMITER)
}

pub fn undot_with(mapping: &Mapping, delimiter: &str) -> Mapping {
    mapping
        .iter()
        .fold(Mapping::new(), |acc, (path, value)| set_with(acc, path, value.clone(), delimiter))
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Mapping {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn flatten_fully() {
        let v = json!(["a", ["b", ["c", ["d"]]], {"x": "e"}]);
        assert_eq!(flatten(&v, None), vec![json!("a"), json!("b"), json!("c"), json!("d"), json!("e")]);
    }

    #[test]
    fn flatten_one_level() {
        let v = json!(["a", ["b", ["c"]]]);
        assert_eq!(flatten(&v, Some(1)), vec![json!("a"), json!("b"), json!(["c"])]);
    }

    #[test]
    fn flatten_two_levels() {
        let v = json!([[["x", ["y"]]]]);
        assert_eq!(flatten(&v, Some(2)), vec![json!("x"), json!(["y"])]);
    }

    #[test]
    fn flatten_scalar_is_empty() {
        assert!(flatten(&json!(3), None).is_empty());
    }

    #[test]
    fn collapse_skips_scalars() {
        let v = json!([[1, 2], 3, [4], {"k": 5}]);
        assert_eq!(collapse(&v), vec![json!(1), json!(2), json!(4), json!(5)]);
    }

    #[test]
    fn dot_flattens_keys() {
        let m = obj(json!({"a": {"b": {"c": 1}, "d": 2}, "e": [10, 20], "f": {}}));
        assert_eq!(
            Value::Object(dot(&m)),
            json!({"a.b.c": 1, "a.d": 2, "e.0": 10, "e.1": 20, "f": {}})
        );
    }

    #[test]
    fn dot_with_custom_delimiter() {
        let m = obj(json!({"a": {"b": 1}}));
        assert_eq!(Value::Object(dot_with(&m, "/")), json!({"a/b": 1}));
    }

    #[test]
    fn undot_expands_keys() {
        let m = obj(json!({"a.b.c": 1, "a.d": 2, "e": 3}));
        assert_eq!(Value::Object(undot(&m)), json!({"a": {"b": {"c": 1}, "d": 2}, "e": 3}));
    }

    #[test]
    fn undot_inverts_dot_for_mappings() {
        let m = obj(json!({"server": {"host": "h", "tls": {"on": true, "certs": {}}}, "port": 80}));
        assert_eq!(undot(&dot(&m)), m);
    }

    #[test]
    fn undot_sequences_come_back_keyed() {
        let m = obj(json!({"e": [10, 20]}));
        assert_eq!(Value::Object(undot(&dot(&m))), json!({"e": {"0": 10, "1": 20}}));
    }

    #[test]
    fn dot_keeps_empty_keys_apart() {
        let m = obj(json!({"": {"b": 1}, "b": 2}));
        let flat = dot(&m);
        assert_eq!(Value::Object(flat.clone()), json!({".b": 1, "b": 2}));
        assert_eq!(undot(&flat), m);
    }

    #[test]
    fn undot_inverts_dot_for_nested_empty_keys() {
        let m = obj(json!({"": {"": 1}}));
        assert_eq!(Value::Object(dot(&m)), json!({".": 1}));
        assert_eq!(undot(&dot(&m)), m);
    }
}
