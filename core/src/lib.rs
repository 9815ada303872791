//! arrkit — helpers for associative and indexed arrays.
//!
//! The value model is `serde_json::Value`; mappings are
//! `serde_json::Map<String, Value>`. The centrepiece is the dot-notation
//! path accessor in [`path`]; the remaining modules are thin helpers for
//! selection, flattening, sorting, grouping, comparison and conversion that
//! read fields through it.
//!
//! ```
//! use arrkit::{get, has, set, Mapping};
//! use serde_json::json;
//!
//! let m = set(Mapping::new(), "a.b.c", json!(1));
//! assert!(has(&m, "a.b"));
//! assert_eq!(get(&m, "a.b.c", json!(0)), json!(1));
//! assert_eq!(get(&m, "a.x", json!(0)), json!(0));
//! ```

pub mod compare;
pub mod config;
pub mod convert;
pub mod error;
pub mod flatten;
pub mod group;
pub mod path;
pub mod select;
pub mod sort;
pub mod types;

pub use config::{Accessor, AccessorOptions};
pub use error::ArrError;
pub use path::{first_present, forget, get, get_first, has, lookup, lookup_in, set, set_in, DotPath};
pub use types::{Mapping, Value};
