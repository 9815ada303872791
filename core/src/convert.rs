//! Format conversion between mappings, JSON/YAML text and caller types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ArrError, Result};
use crate::types::value::{Mapping, Value};


/// Compact JSON text for a mapping.
pub fn to_json(mapping: &Mapping) -> Result<String> {
    Ok(serde_json::to_string(mapping)?)
}

/// Indented JSON text for a mapping.
pub fn to_json_pretty(mapping: &Mapping) -> Result<String> {
    Ok(serde_json::to_string_pretty(mapping)?)
}

/// Parse JSON text whose root must be an object.
pub fn from_json(text: &str) -> Result<Mapping> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        debug!(error = %e, "json parse failed");
        ArrError::from(e)
    })?;
    into_mapping(value)
}

/// YAML text for a mapping.
pub fn to_yaml(mapping: &Mapping) -> Result<String> {
    Ok(serde_yaml::to_string(mapping)?)
}

/// Parse YAML text whose root must be a mapping.
pub fn from_yaml(text: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| {
        debug!(error = %e, "yaml parse failed");
        ArrError::from(e)
    })?;
    into_mapping(value)
}

/// Serialize any caller type into the value model.
pub fn to_value<T: Serialize>(item: &T) -> Result<Value> {
    Ok(serde_json::to_value(item)?)
}

/// Serialize a caller type that must serialize to a mapping (a struct or map).
pub fn to_mapping<T: Serialize>(item: &T) -> Result<Mapping> {
    into_mapping(to_value(item)?)
}

/// Rebuild a caller type from a value.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}


/// Name of a value's kind, for error messages.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}


fn into_mapping(value: Value) -> Result<Mapping> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ArrError::NotAMapping { found: kind(&other) }),
    }
}
