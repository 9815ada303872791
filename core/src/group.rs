//! Grouping helpers keyed by a dot path.

use crate::path::accessor::lookup_in;
use crate::types::value::{entries, key_string, Mapping, Value};


/// Group the elements of `items` by the stringified value at `path`.
///
/// Each group is a sequence in original order. Elements without the path
/// land in the `""` group.
pub fn group_by(items: &Value, path: &str) -> Mapping {
    let mut groups = Mapping::new();
    for (_, item) in entries(items) {
        let key = group_key(item, path);
        let slot = groups
            .entry(key)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(members) = slot {
            members.push(item.clone());
        }
    }
    groups
}


/// Index the elements of `items` by the stringified value at `path`.
///
/// Later elements replace earlier ones with the same key.
pub fn key_by(items: &Value, path: &str) -> Mapping {
    entries(items)
        .into_iter()
        .map(|(_, item)| (group_key(item, path), item.clone()))
        .collect()
}


/// Count the elements of `items` per stringified value at `path`.
pub fn count_by(items: &Value, path: &str) -> Mapping {
    let mut counts = Mapping::new();
    for (_, item) in entries(items) {
        let slot = counts.entry(group_key(item, path)).or_insert(Value::from(0u64));
        let next = slot.as_u64().unwrap_or(0) + 1;
        *slot = Value::from(next);
    }
    counts
}


fn group_key(item: &Value, path: &str) -> String {
    lookup_in(item, path).map(key_string).unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn orders() -> Value {
        json!([
            {"id": 1, "status": "open", "customer": {"region": "eu"}},
            {"id": 2, "status": "closed", "customer": {"region": "us"}},
            {"id": 3, "status": "open", "customer": {"region": "eu"}},
            {"id": 4}
        ])
    }

    #[test]
    fn group_by_field() {
        let groups = group_by(&orders(), "status");
        assert_eq!(groups.len(), 3);
        let open: Vec<i64> = groups["open"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_i64().unwrap())
            .collect();
        assert_eq!(open, vec![1, 3]);
        assert_eq!(groups[""], json!([{"id": 4}]));
    }

    #[test]
    fn group_by_nested_path() {
        let groups = group_by(&orders(), "customer.region");
        assert_eq!(groups["eu"].as_array().unwrap().len(), 2);
        assert_eq!(groups["us"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn group_by_numeric_key() {
        let groups = group_by(&json!([{"n": 1}, {"n": 1}, {"n": 2}]), "n");
        assert_eq!(Value::Object(groups), json!({"1": [{"n": 1}, {"n": 1}], "2": [{"n": 2}]}));
    }

    #[test]
    fn group_by_empty_input() {
        assert!(group_by(&json!([]), "x").is_empty());
    }

    #[test]
    fn key_by_last_wins() {
        let keyed = key_by(&json!([{"k": "a", "v": 1}, {"k": "a", "v": 2}, {"k": "b", "v": 3}]), "k");
        assert_eq!(Value::Object(keyed), json!({"a": {"k": "a", "v": 2}, "b": {"k": "b", "v": 3}}));
    }

    #[test]
    fn count_by_field() {
        let counts = count_by(&orders(), "status");
        assert_eq!(Value::Object(counts), json!({"open": 2, "closed": 1, "": 1}));
    }
}
