//! Human-readable source positions.

use std::fmt;

/// 1-based `line:column` position.
///
/// Columns count Unicode scalar values, not bytes: a 4-byte emoji advances
/// the column by one. Locations are derived from byte offsets on demand via
/// [`SourceText::line_col`](crate::SourceText::line_col) and never stored on
/// tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    /// Position of the first character of a source.
    pub const START: Location = Location { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// Step past `ch`: a newline starts the next line, anything else moves
    /// one column right.
    #[inline]
    pub(crate) fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
