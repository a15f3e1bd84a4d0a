//! Character cursor over a borrowed source.
//!
//! The cursor walks the text one Unicode scalar value at a time, tracking
//! its position as a byte offset. Every position it can reach lies on a
//! UTF-8 character boundary, so slices taken between two cursor positions
//! never split a character.

use lux_text::SourceText;

/// Cursor over the text of a [`SourceText`].
///
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
///
/// # Invariant
///
/// `pos` is always a character boundary and never exceeds the source
/// length. The length fits in `u32`, guaranteed by [`SourceText::new`].
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at byte 0 of `source`.
    pub fn new(source: &'a SourceText) -> Self {
        Cursor {
            text: source.as_str(),
            pos: 0,
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.text.len()
    }

    /// Unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos as usize..]
    }

    /// Next character, without consuming it. `None` at EOF.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character. `None` at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    #[inline]
    pub fn consume(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8() as u32;
        Some(ch)
    }

    /// Consume characters while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    /// Jump to the next `"` or `\n` using SIMD-accelerated search.
    ///
    /// Returns the byte found, leaving the cursor on it, or `None` with the
    /// cursor at EOF. Both needles are ASCII, so the landing position is a
    /// character boundary.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < rest().len() <= source length which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> Option<u8> {
        let remaining = self.rest().as_bytes();
        if let Some(offset) = memchr::memchr2(b'"', b'\n', remaining) {
            self.pos += offset as u32;
            Some(remaining[offset])
        } else {
            self.pos += remaining.len() as u32;
            None
        }
    }

    /// Source text between two positions.
    ///
    /// # Contract
    ///
    /// `start..end` must come from this cursor's own positions, so both ends
    /// are character boundaries within the source.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start as usize..end as usize]
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }
}
