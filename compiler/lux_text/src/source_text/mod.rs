//! Immutable holder of a complete lux source.
//!
//! [`SourceText`] owns the text a scanner borrows for its whole lifetime and
//! resolves byte offsets back to [`Location`]s for diagnostics.
//!
//! # Offset Clamping
//!
//! [`line_col`](SourceText::line_col) never fails. Offsets past the end of the
//! content are clamped to the last byte (`len - 1`), and offsets that land
//! inside a multi-byte character are walked back to the character's first
//! byte. On empty content every offset resolves to `1:1`.

use crate::{Location, Span, TextError};

/// Complete source text, guaranteed valid UTF-8 and addressable by `u32`
/// offsets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceText {
    content: String,
}

impl SourceText {
    /// Wrap source text.
    ///
    /// Fails only when the content is too long for `u32` offsets.
    pub fn new(content: impl Into<String>) -> Result<Self, TextError> {
        let content = content.into();
        if u32::try_from(content.len()).is_err() {
            return Err(TextError::TooLarge { len: content.len() });
        }
        Ok(SourceText { content })
    }

    /// The full source.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length of the source in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "length checked against u32::MAX in SourceText::new"
    )]
    #[inline]
    pub fn len(&self) -> u32 {
        self.content.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Translate a 0-based byte offset into a 1-based line and column.
    ///
    /// Walks every character from the start of the source up to `offset`,
    /// so the cost is O(offset). Meant for diagnostics only.
    pub fn line_col(&self, offset: u32) -> Location {
        let mut offset = offset as usize;
        if offset > self.content.len() {
            offset = self.content.len().saturating_sub(1);
        }

        // Never split a character: back up to the first byte of the sequence.
        while offset > 0 && !self.content.is_char_boundary(offset) {
            offset -= 1;
        }

        let mut loc = Location::START;
        for ch in self.content[..offset].chars() {
            loc.advance(ch);
        }
        loc
    }

    /// Location of the start of `span`.
    #[inline]
    pub fn location(&self, span: Span) -> Location {
        self.line_col(span.start)
    }

    /// Locations of both ends of `span`.
    pub fn span_locations(&self, span: Span) -> (Location, Location) {
        (self.line_col(span.start), self.line_col(span.end))
    }

    /// The text covered by `span`.
    pub fn slice(&self, span: Span) -> Result<&str, TextError> {
        if span.start > span.end || span.end > self.len() {
            return Err(TextError::SpanOutOfBounds {
                span,
                len: self.len(),
            });
        }
        for offset in [span.start, span.end] {
            if !self.content.is_char_boundary(offset as usize) {
                return Err(TextError::NotCharBoundary(offset));
            }
        }
        Ok(&self.content[span.to_range()])
    }
}

impl AsRef<str> for SourceText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for SourceText {
    type Error = TextError;

    fn try_from(content: &str) -> Result<Self, Self::Error> {
        SourceText::new(content)
    }
}

impl TryFrom<String> for SourceText {
    type Error = TextError;

    fn try_from(content: String) -> Result<Self, Self::Error> {
        SourceText::new(content)
    }
}
