//! Errors raised by the text layer.

use crate::Span;

/// Misuse of text coordinates.
///
/// Lexical faults never show up here; they are reported as error tokens by
/// the scanner. These errors only guard the boundary between callers and
/// the text layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// Source content is longer than a `u32` offset can address.
    #[error("source is {len} bytes, which exceeds the maximum of {max} bytes", max = u32::MAX)]
    TooLarge { len: usize },

    /// A byte offset does not fit in a `u32`.
    #[error("offset {0} exceeds u32::MAX")]
    OffsetTooLarge(usize),

    /// A range whose start lies after its end.
    #[error("range {start}..{end} starts after it ends")]
    InvertedRange { start: usize, end: usize },

    /// A span reaches past the end of the content, or starts after it ends.
    #[error("span {span} is out of bounds for source of {len} bytes")]
    SpanOutOfBounds { span: Span, len: u32 },

    /// A span endpoint falls inside a multi-byte UTF-8 sequence.
    #[error("offset {0} is not on a UTF-8 character boundary")]
    NotCharBoundary(u32),
}
