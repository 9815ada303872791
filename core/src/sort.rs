//! Sorting helpers with loose, numeric-aware ordering.
//!
//! Numeric strings sort with numbers (`"10"` after `9`), so lists read from
//! form input or CSV order the way they look.

use std::cmp::Ordering;

use serde_json::Number;

use crate::path::accessor::lookup_in;
use crate::types::value::{entries, Value};


/// Total order over values.
///
/// Null < bool < number (numeric strings included) < other string
/// < sequence < mapping. Containers compare by length only.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    let (ra, rb) = (rank(a), rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::String(x), Value::String(y)) if ra == Rank::Text => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x.len().cmp(&y.len()),
        (Value::Object(x), Value::Object(y)) => x.len().cmp(&y.len()),
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        _ => match (numeric(a), numeric(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}


/// Values of `items` sorted by the value each holds at `path`.
///
/// The sort is stable; elements missing the path sort as `null`.
pub fn sort_by_path(items: &Value, path: &str, descending: bool) -> Vec<Value> {
    let mut out: Vec<Value> = entries(items).into_iter().map(|(_, v)| v.clone()).collect();
    out.sort_by(|a, b| {
        let ka = lookup_in(a, path).unwrap_or(&Value::Null);
        let kb = lookup_in(b, path).unwrap_or(&Value::Null);
        let ord = compare_values(ka, kb);
        if descending { ord.reverse() } else { ord }
    });
    out
}


/// Values of `items` sorted by themselves.
pub fn sort_values(items: &Value, descending: bool) -> Vec<Value> {
    let mut out: Vec<Value> = entries(items).into_iter().map(|(_, v)| v.clone()).collect();
    out.sort_by(|a, b| {
        let ord = compare_values(a, b);
        if descending { ord.reverse() } else { ord }
    });
    out
}


/// Sort every sequence at every depth.
///
/// Mapping keys are already kept in sorted order by `serde_json::Map`.
pub fn sort_recursive(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), sort_recursive(v)))
                .collect(),
        ),
        Value::Array(items) => {
            let mut sorted: Vec<Value> = items.iter().map(sort_recursive).collect();
            sorted.sort_by(compare_values);
            Value::Array(sorted)
        }
        other => other.clone(),
    }
}


// ---------------------------------------------------------------------------
// Internal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank {
    Null,
    Bool,
    Number,
    Text,
    Sequence,
    Mapping,
}

fn rank(value: &Value) -> Rank {
    match value {
        Value::Null => Rank::Null,
        Value::Bool(_) => Rank::Bool,
        Value::Number(_) => Rank::Number,
        Value::String(_) if numeric(value).is_some() => Rank::Number,
        Value::String(_) => Rank::Text,
        Value::Array(_) => Rank::Sequence,
        Value::Object(_) => Rank::Mapping,
    }
}

/// Integers compare exactly; f64 only when a float is involved.
fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    match (x.as_i64(), y.as_i64(), x.as_u64(), y.as_u64()) {
        (Some(a), Some(b), _, _) => a.cmp(&b),
        (_, _, Some(a), Some(b)) => a.cmp(&b),
        // One side is a u64 above i64::MAX, the other a negative i64.
        (Some(_), None, _, Some(_)) => Ordering::Less,
        (None, Some(_), Some(_), _) => Ordering::Greater,
        _ => match (x.as_f64(), y.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
