//! Path accessor: dot-notation get/set/has over nested mappings.
//!
//! Provides delimited path splitting (`user.address.city`) and the total
//! read/write operations built on it.

pub mod accessor;
pub mod segments;

pub use accessor::{first_present, forget, get, get_first, has, lookup, lookup_in, set, set_in};
pub use segments::{DotPath, DEFAULT_DELIMITER};
