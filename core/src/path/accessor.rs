//! Dot-notation access into nested mappings.
//!
//! Reads (`get`, `lookup`, `has`) first try the whole path as a literal
//! top-level key, so keys that contain the delimiter stay reachable. Writes
//! (`set`) always split and overwrite any non-container value standing in
//! the way with a fresh mapping.
//!
//! Every function here is total: a missing path is a default, `None` or
//! `false`, never an error.

use tracing::trace;

use super::segments::{DotPath, DEFAULT_DELIMITER};
use crate::types::value::{parse_index, sequence_to_mapping, Mapping, Value};


/// Resolve `path` in `mapping`, or `None` when any segment is missing.
pub fn lookup<'a>(mapping: &'a Mapping, path: &str) -> Option<&'a Value> {
    lookup_with(mapping, path, DEFAULT_DELIMITER)
}

/// Resolve `path` in `mapping`, returning a clone of the value or `default`.
///
/// A stored `null` is returned as `null`; use `has` to tell a stored value
/// equal to `default` apart from a missing one.
pub fn get(mapping: &Mapping, path: &str, default: Value) -> Value {
    lookup(mapping, path).cloned().unwrap_or(default)
}

/// True if `path` resolves, even when the value stored there is `null`.
pub fn has(mapping: &Mapping, path: &str) -> bool {
    lookup(mapping, path).is_some()
}

/// Write `value` at `path`, creating or overwriting intermediate mappings,
/// and return the new root.
pub fn set(mapping: Mapping, path: &str, value: Value) -> Mapping {
    set_with(mapping, path, value, DEFAULT_DELIMITER)
}

/// In-place form of `set`.
pub fn set_in(mapping: &mut Mapping, path: &str, value: Value) {
    let root = std::mem::take(mapping);
    *mapping = set(root, path, value);
}

/// The first candidate path that resolves to a non-null value, else `default`.
///
/// A `null` stored on purpose is skipped exactly like a missing key.
pub fn get_first<I, S>(mapping: &Mapping, keys: I, default: Value) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    get_first_with(mapping, keys, default, DEFAULT_DELIMITER)
}

/// The first candidate path that resolves at all, stored `null` included.
pub fn first_present<'a, I, S>(mapping: &'a Mapping, keys: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    first_present_with(mapping, keys, DEFAULT_DELIMITER)
}

/// Remove the value at `path` and return it.
pub fn forget(mapping: &mut Mapping, path: &str) -> Option<Value> {
    forget_with(mapping, path, DEFAULT_DELIMITER)
}

/// Resolve `path` starting from any value rather than a mapping.
///
/// Used by the helpers that read fields out of list elements, which may be
/// mappings or sequences.
pub fn lookup_in<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    lookup_in_with(value, path, DEFAULT_DELIMITER)
}


// ---------------------------------------------------------------------------
// Delimiter-aware implementations
// ---------------------------------------------------------------------------

pub(crate) fn lookup_with<'a>(
    mapping: &'a Mapping,
    path: &str,
    delimiter: &str,
) -> Option<&'a Value> {
    if let Some(value) = mapping.get(path) {
        return Some(value);
    }
    let parsed = DotPath::parse(path, delimiter);
    let (head, rest) = parsed.segments.split_first()?;
    walk(mapping.get(head.as_str())?, rest)
}

pub(crate) fn lookup_in_with<'a>(
    value: &'a Value,
    path: &str,
    delimiter: &str,
) -> Option<&'a Value> {
    match value {
        Value::Object(map) => lookup_with(map, path, delimiter),
        _ => {
            let parsed = DotPath::parse(path, delimiter);
            walk(value, &parsed.segments)
        }
    }
}

pub(crate) fn set_with(mut mapping: Mapping, path: &str, value: Value, delimiter: &str) -> Mapping {
    let parsed = DotPath::parse(path, delimiter);
    if let Some((head, rest)) = parsed.segments.split_first() {
        let existing = mapping.remove(head.as_str()).unwrap_or(Value::Null);
        mapping.insert(head.clone(), assign(existing, rest, value));
    }
    mapping
}

pub(crate) fn get_first_with<I, S>(mapping: &Mapping, keys: I, default: Value, delimiter: &str) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .filter_map(|key| lookup_with(mapping, key.as_ref(), delimiter))
        .find(|value| !value.is_null())
        .cloned()
        .unwrap_or(default)
}

pub(crate) fn first_present_with<'a, I, S>(
    mapping: &'a Mapping,
    keys: I,
    delimiter: &str,
) -> Option<&'a Value>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter()
        .find_map(|key| lookup_with(mapping, key.as_ref(), delimiter))
}

pub(crate) fn forget_with(mapping: &mut Mapping, path: &str, delimiter: &str) -> Option<Value> {
    if mapping.contains_key(path) {
        return mapping.remove(path);
    }
    let parsed = DotPath::parse(path, delimiter);
    let (leaf, parents) = parsed.segments.split_last()?;
    match parents.split_first() {
        None => mapping.remove(leaf.as_str()),
        Some((head, rest)) => {
            let mut current = mapping.get_mut(head.as_str())?;
            for segment in rest {
                current = descend_mut(current, segment)?;
            }
            remove_child(current, leaf)
        }
    }
}


// ---------------------------------------------------------------------------
// Internal: traversal and reconstruction
// ---------------------------------------------------------------------------

fn walk<'a>(start: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(start, |current, segment| descend(current, segment))
}

fn descend<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn descend_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => parse_index(segment).and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

fn remove_child(value: &mut Value, segment: &str) -> Option<Value> {
    match value {
        Value::Object(map) => map.remove(segment),
        Value::Array(items) => {
            let i = parse_index(segment)?;
            if i < items.len() {
                Some(items.remove(i))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Rebuild `node` with `value` written at `segments`, consuming the old node.
fn assign(node: Value, segments: &[String], value: Value) -> Value {
    let Some((head, rest)) = segments.split_first() else {
        return value;
    };

    match node {
        Value::Object(mut map) => {
            let child = map.remove(head.as_str()).unwrap_or(Value::Null);
            map.insert(head.clone(), assign(child, rest, value));
            Value::Object(map)
        }
        Value::Array(mut items) => match parse_index(head) {
            Some(i) if i < items.len() => {
                let child = std::mem::take(&mut items[i]);
                items[i] = assign(child, rest, value);
                Value::Array(items)
            }
            Some(i) if i == items.len() => {
                items.push(assign(Value::Null, rest, value));
                Value::Array(items)
            }
            _ => {
                trace!(segment = %head, len = items.len(), "promoting sequence to mapping");
                let mut map = sequence_to_mapping(items);
                map.insert(head.clone(), assign(Value::Null, rest, value));
                Value::Object(map)
            }
        },
        other => {
            if !other.is_null() {
                trace!(segment = %head, replaced = %other, "overwriting scalar with mapping");
            }
            let mut map = Mapping::new();
            map.insert(head.clone(), assign(Value::Null, rest, value));
            Value::Object(map)
        }
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
