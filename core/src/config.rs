//! Accessor configuration.
//!
//! The free functions in `path` always split on `.`. Hosts that address
//! their data with another separator build an `Accessor` from
//! `AccessorOptions`, either in code or from a JSON/YAML fragment such as
//! `delimiter: "/"`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ArrError, Result};
use crate::path::accessor::{
    first_present_with, forget_with, get_first_with, lookup_in_with, lookup_with, set_with,
};
use crate::path::segments::{DotPath, DEFAULT_DELIMITER};
use crate::types::value::{Mapping, Value};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AccessorOptions {
    /// Segment separator used to split paths.
    pub delimiter: String,
}

impl Default for AccessorOptions {
    fn default() -> Self {
        AccessorOptions {
            delimiter: DEFAULT_DELIMITER.into(),
        }
    }
}

impl AccessorOptions {
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self> {
        let options = AccessorOptions {
            delimiter: delimiter.into(),
        };
        options.validate()?;
        Ok(options)
    }

    /// Parse options from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let options: AccessorOptions = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse options from YAML text. Missing fields take their defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let options: AccessorOptions = serde_yaml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            debug!("rejecting accessor options with empty delimiter");
            return Err(ArrError::InvalidOptions("delimiter must not be empty".into()));
        }
        Ok(())
    }
}


/// Path accessor bound to a set of options.
#[derive(Debug, Clone, Default)]
pub struct Accessor {
    options: AccessorOptions,
}

impl Accessor {
    pub fn new(options: AccessorOptions) -> Result<Self> {
        options.validate()?;
        Ok(Accessor { options })
    }

    pub fn options(&self) -> &AccessorOptions {
        &self.options
    }

    pub fn delimiter(&self) -> &str {
        &self.options.delimiter
    }

    /// Split `path` with this accessor's delimiter.
    pub fn parse(&self, path: &str) -> DotPath {
        DotPath::parse(path, self.delimiter())
    }

    pub fn lookup<'a>(&self, mapping: &'a Mapping, path: &str) -> Option<&'a Value> {
        lookup_with(mapping, path, self.delimiter())
    }

    pub fn lookup_in<'a>(&self, value: &'a Value, path: &str) -> Option<&'a Value> {
        lookup_in_with(value, path, self.delimiter())
    }

    pub fn get(&self, mapping: &Mapping, path: &str, default: Value) -> Value {
        self.lookup(mapping, path).cloned().unwrap_or(default)
    }

    pub fn has(&self, mapping: &Mapping, path: &str) -> bool {
        self.lookup(mapping, path).is_some()
    }

    pub fn set(&self, mapping: Mapping, path: &str, value: Value) -> Mapping {
        set_with(mapping, path, value, self.delimiter())
    }

    pub fn set_in(&self, mapping: &mut Mapping, path: &str, value: Value) {
        let root = std::mem::take(mapping);
        *mapping = self.set(root, path, value);
    }

    pub fn get_first<I, S>(&self, mapping: &Mapping, keys: I, default: Value) -> Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        get_first_with(mapping, keys, default, self.delimiter())
    }

    pub fn first_present<'a, I, S>(&self, mapping: &'a Mapping, keys: I) -> Option<&'a Value>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        first_present_with(mapping, keys, self.delimiter())
    }

    pub fn forget(&self, mapping: &mut Mapping, path: &str) -> Option<Value> {
        forget_with(mapping, path, self.delimiter())
    }
}
