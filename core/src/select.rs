//! Selection helpers: pick keys, drop keys, pull fields out of lists, filter.
//!
//! Field arguments are dot paths, so `pluck(users, "address.city", None)`
//! reads nested fields and `pluck(rows, "0", None)` reads the first column
//! of a list of lists.

use crate::path::accessor::{forget, lookup_in};
use crate::types::value::{entries, key_string, Mapping, Value};


/// Keep only the listed top-level keys.
pub fn only<I, S>(mapping: &Mapping, keys: I) -> Mapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .filter_map(|key| {
            let key = key.as_ref();
            mapping.get(key).map(|v| (key.to_string(), v.clone()))
        })
        .collect()
}


/// Drop the listed paths. Nested paths remove only their leaf.
pub fn except<I, S>(mapping: &Mapping, paths: I) -> Mapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = mapping.clone();
    for path in paths {
        forget(&mut out, path.as_ref());
    }
    out
}


/// Collect the value at `value_path` from every element of `items`.
///
/// Without a key path the result is a sequence in element order, with
/// `null` standing in for elements that lack the field. With a key path the
/// result is a mapping keyed by the stringified value found there; later
/// elements overwrite earlier ones on key collisions.
pub fn pluck(items: &Value, value_path: &str, key_path: Option<&str>) -> Value {
    let elements = entries(items);
    let field = |item: &Value| lookup_in(item, value_path).cloned().unwrap_or(Value::Null);

    match key_path {
        None => Value::Array(elements.into_iter().map(|(_, item)| field(item)).collect()),
        Some(key_path) => {
            let mut out = Mapping::new();
            for (_, item) in elements {
                let key = lookup_in(item, key_path).map(key_string).unwrap_or_default();
                out.insert(key, field(item));
            }
            Value::Object(out)
        }
    }
}


/// Keep the entries for which `predicate(key, value)` holds.
///
/// Mappings keep their keys; sequences keep their order and are reindexed.
/// Scalars yield an empty sequence.
pub fn where_items<F>(items: &Value, mut predicate: F) -> Value
where
    F: FnMut(&str, &Value) -> bool,
{
    match items {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(k, v)| predicate(k, v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ),
        _ => Value::Array(
            entries(items)
                .into_iter()
                .filter(|(k, v)| predicate(k, v))
                .map(|(_, v)| v.clone())
                .collect(),
        ),
    }
}


/// First entry satisfying `predicate`, in iteration order.
pub fn first<F>(items: &Value, mut predicate: F) -> Option<&Value>
where
    F: FnMut(&str, &Value) -> bool,
{
    entries(items)
        .into_iter()
        .find(|(k, v)| predicate(k, v))
        .map(|(_, v)| v)
}


/// Last entry satisfying `predicate`, in iteration order.
pub fn last<F>(items: &Value, mut predicate: F) -> Option<&Value>
where
    F: FnMut(&str, &Value) -> bool,
{
    entries(items)
        .into_iter()
        .rev()
        .find(|(k, v)| predicate(k, v))
        .map(|(_, v)| v)
}


/// Wrap a value in a sequence unless it already is one. `null` wraps to `[]`.
pub fn wrap(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Value {
        json!([
            {"id": 1, "name": "ann", "address": {"city": "Oslo"}},
            {"id": 2, "name": "bob", "address": {"city": "Rome"}},
            {"id": 3, "name": "cid"}
        ])
    }

    fn obj(value: Value) -> Mapping {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn only_keeps_listed_keys() {
        let m = obj(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(Value::Object(only(&m, ["a", "c", "zz"])), json!({"a": 1, "c": 3}));
    }

    #[test]
    fn except_drops_nested_leaf() {
        let m = obj(json!({"a": 1, "b": {"x": 1, "y": 2}}));
        assert_eq!(Value::Object(except(&m, ["a", "b.x"])), json!({"b": {"y": 2}}));
        // Original untouched.
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn pluck_values() {
        assert_eq!(pluck(&users(), "name", None), json!(["ann", "bob", "cid"]));
    }

    #[test]
    fn pluck_nested_with_missing_field() {
        assert_eq!(pluck(&users(), "address.city", None), json!(["Oslo", "Rome", null]));
    }

    #[test]
    fn pluck_keyed() {
        assert_eq!(
            pluck(&users(), "name", Some("id")),
            json!({"1": "ann", "2": "bob", "3": "cid"})
        );
    }

    #[test]
    fn pluck_keyed_collision_keeps_last() {
        let rows = json!([{"k": "a", "v": 1}, {"k": "a", "v": 2}]);
        assert_eq!(pluck(&rows, "v", Some("k")), json!({"a": 2}));
    }

    #[test]
    fn pluck_from_list_of_lists() {
        let rows = json!([["x", 1], ["y", 2]]);
        assert_eq!(pluck(&rows, "1", Some("0")), json!({"x": 1, "y": 2}));
    }

    #[test]
    fn pluck_from_mapping_values() {
        let by_id = json!({"a": {"n": 1}, "b": {"n": 2}});
        assert_eq!(pluck(&by_id, "n", None), json!([1, 2]));
    }

    #[test]
    fn where_items_on_sequence_reindexes() {
        let out = where_items(&json!([1, 2, 3, 4]), |_, v| v.as_i64().unwrap_or(0) % 2 == 0);
        assert_eq!(out, json!([2, 4]));
    }

    #[test]
    fn where_items_on_mapping_keeps_keys() {
        let out = where_items(&json!({"a": 1, "b": 2}), |k, _| k == "b");
        assert_eq!(out, json!({"b": 2}));
    }

    #[test]
    fn first_and_last() {
        let items = json!([1, 5, 2, 7]);
        let big = |_: &str, v: &Value| v.as_i64().unwrap_or(0) > 3;
        assert_eq!(first(&items, big), Some(&json!(5)));
        assert_eq!(last(&items, big), Some(&json!(7)));
        assert_eq!(first(&json!([]), |_, _| true), None);
        assert_eq!(last(&json!([1]), |_, _| false), None);
    }

    #[test]
    fn wrap_values() {
        assert!(wrap(Value::Null).is_empty());
        assert_eq!(wrap(json!([1, 2])), vec![json!(1), json!(2)]);
        assert_eq!(wrap(json!("x")), vec![json!("x")]);
    }
}
