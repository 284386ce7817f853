//! Source positions
//!
//! Lines and columns are 1-based and counted in characters, not bytes, so that
//! positions line up with what editors display for non-ASCII sources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line:column position in a source file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location of the first non-whitespace character of `line`.
    pub fn of_content(line: &str, line_number: usize) -> Self {
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        Self::new(line_number, indent + 1)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
