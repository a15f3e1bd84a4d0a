//! Pull-based scanner producing located lux tokens.
//!
//! Each call to [`Scanner::next_token`] skips whitespace, records the token
//! start, then dispatches on the next character. Every token's span runs
//! from that start to wherever the cursor stopped, so spans are byte-exact
//! and never include the whitespace in front of them.
//!
//! # Errors
//!
//! Malformed input never stops the scanner. Each fault is reported as a
//! single [`TokenKind::Error`] token and the next call resumes exactly where
//! the faulty token ended; there is no resynchronization at delimiters.
//!
//! # End Of Input
//!
//! EOF is derived from the cursor position alone. Once reached, every
//! further call returns another zero-length EOF token at the source length.

use std::iter::FusedIterator;

use lux_text::{SourceText, Span};
use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::cursor::Cursor;
use crate::{LexError, Token, TokenKind};

/// Tokenizer over one [`SourceText`].
///
/// Holds mutable cursor state, so a scanner is driven through `&mut self`
/// by one caller at a time. Independent scanners may share the same source.
pub struct Scanner<'src> {
    source: &'src SourceText,
    cursor: Cursor<'src>,
    /// Offset where the token being scanned begins.
    token_start: u32,
}

impl<'src> Scanner<'src> {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &'src SourceText) -> Self {
        Scanner {
            source,
            cursor: Cursor::new(source),
            token_start: 0,
        }
    }

    /// The source being scanned.
    pub fn source(&self) -> &'src SourceText {
        self.source
    }

    /// Current cursor offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] with a zero-length span once the source is
    /// exhausted, and keeps returning it on subsequent calls.
    pub fn next_token(&mut self) -> Token<'src> {
        self.cursor.eat_while(char::is_whitespace);
        self.token_start = self.cursor.pos();

        let token = match self.cursor.peek() {
            None => self.bare(TokenKind::Eof),
            Some('.') => self.single(TokenKind::Dot),
            Some('{') => self.single(TokenKind::LBrace),
            Some('}') => self.single(TokenKind::RBrace),
            Some('[') => self.single(TokenKind::LBracket),
            Some(']') => self.single(TokenKind::RBracket),
            Some(':') => self.single(TokenKind::Colon),
            Some('=') => self.single(TokenKind::Equals),
            Some(',') => self.single(TokenKind::Comma),
            Some('"') => self.string(),
            Some(c) if is_decimal_digit(c) => self.number(),
            Some(c) if is_ident_start(c) => self.identifier(),
            Some(c) => self.invalid_char(c),
        };

        trace!(
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "token"
        );
        token
    }

    /// Consume the scanner into an iterator over its remaining tokens.
    ///
    /// The iterator yields the first EOF token and then ends.
    pub fn tokens(self) -> Tokens<'src> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    // ─── Literals ──────────────────────────────────────────────────────

    /// String literal. The literal is the raw text between the quotes; no
    /// escape sequences are recognized.
    fn string(&mut self) -> Token<'src> {
        self.cursor.consume(); // opening '"'
        match self.cursor.skip_to_string_delim() {
            Some(b'"') => {
                let value = self.cursor.slice_from(self.token_start + 1);
                self.cursor.consume(); // closing '"'
                self.emit(TokenKind::String, value)
            }
            // Newline or EOF: the span stops before the offending byte.
            _ => self.error(LexError::UnclosedString),
        }
    }

    /// Integer literal: a run of decimal digits. A following `.` is left for
    /// the next call, so `1.0` scans as `1`, `.`, `0`.
    fn number(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_decimal_digit);
        let value = self.cursor.slice_from(self.token_start);
        self.emit(TokenKind::Number, value)
    }

    /// Identifier, or a boolean when the word is exactly `true` or `false`.
    fn identifier(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        let value = self.cursor.slice_from(self.token_start);
        let kind = match value {
            "true" | "false" => TokenKind::Bool,
            _ => TokenKind::Ident,
        };
        self.emit(kind, value)
    }

    // ─── Errors ────────────────────────────────────────────────────────

    fn invalid_char(&mut self, c: char) -> Token<'src> {
        self.cursor.consume();
        self.error(LexError::InvalidCharacter(c))
    }

    fn error(&self, error: LexError) -> Token<'src> {
        let span = self.span();
        debug!(%span, %error, "lexical error");
        Token::error(error, span)
    }

    // ─── Emission ──────────────────────────────────────────────────────

    /// Punctuation: consume one character, no literal.
    fn single(&mut self, kind: TokenKind) -> Token<'src> {
        self.cursor.consume();
        self.bare(kind)
    }

    fn bare(&self, kind: TokenKind) -> Token<'src> {
        Token::bare(kind, self.span())
    }

    fn emit(&self, kind: TokenKind, value: &'src str) -> Token<'src> {
        Token::new(kind, value, self.span())
    }

    /// Span of the token being scanned: `[token_start, cursor)`.
    fn span(&self) -> Span {
        Span::new(self.token_start, self.cursor.pos())
    }
}

/// Iterator over a scanner's tokens, ending after the first EOF.
///
/// Created by [`Scanner::tokens`].
pub struct Tokens<'src> {
    scanner: Scanner<'src>,
    done: bool,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.scanner.next_token();
        self.done = token.is_eof();
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

// ─── Character Classes ─────────────────────────────────────────────────
//
// Classification is by Unicode general category: letters are `L*`, digits
// are `Nd`. Letter-numbers (`Ⅰ`), other numbers (`²`) and combining marks
// belong to neither.

/// General category `L*` (Lu, Ll, Lt, Lm, Lo).
fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// General category `Nd`, ASCII `0-9` included.
fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c == '_' || is_letter(c)
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c == '_' || is_letter(c) || is_decimal_digit(c)
}
