//! Delimited path parser.
//!
//! Splits strings like `user.address.city` into their segments. Unlike a
//! strict parser nothing is rejected: an empty input is a single empty
//! segment and `a..b` carries an empty middle segment, so every string is
//! a valid path.

use std::fmt;


/// Delimiter used by the free functions.
pub const DEFAULT_DELIMITER: &str = ".";


/// A path split into its segments, remembering the delimiter it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotPath {
    pub segments: Vec<String>,
    delimiter: String,
}

impl DotPath {
    /// Split `input` on `delimiter`.
    ///
    /// An empty delimiter never splits, leaving the whole input as one
    /// segment.
    pub fn parse(input: &str, delimiter: &str) -> Self {
        let segments = if delimiter.is_empty() {
            vec![input.to_string()]
        } else {
            input.split(delimiter).map(str::to_string).collect()
        };
        DotPath {
            segments,
            delimiter: delimiter.to_string(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Join the segments back together with the delimiter.
    pub fn to_dotted(&self) -> String {
        self.segments.join(&self.delimiter)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
