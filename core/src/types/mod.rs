pub mod value;

pub use value::{entries, is_container, key_string, parse_index, sequence_to_mapping, Mapping, Value};
