//! Token model for lux.
//!
//! A [`Token`] is a classified, located fragment of source text: its
//! [`TokenKind`], the raw literal text (empty for punctuation) and the
//! byte [`Span`] it was read from.

use std::borrow::Cow;
use std::fmt;

use lux_text::Span;

use crate::LexError;

/// Closed set of token kinds.
///
/// Discriminants are stable and contiguous from 0, so a raw `u8` maps back
/// to a kind through [`TokenKind::from_raw`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// Lexical fault; the literal carries the message.
    Error = 0,
    /// End of input. Always zero-length.
    Eof = 1,
    Ident = 2,
    /// Unsigned decimal integer, digits only.
    Number = 3,
    /// Double-quoted string; the literal excludes the quotes.
    String = 4,
    /// `true` or `false`.
    Bool = 5,
    Dot = 6,
    LBrace = 7,
    RBrace = 8,
    LBracket = 9,
    RBracket = 10,
    Colon = 11,
    Equals = 12,
    Comma = 13,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Error,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Bool,
        TokenKind::Dot,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Colon,
        TokenKind::Equals,
        TokenKind::Comma,
    ];

    /// Recover a kind from its raw discriminant.
    pub fn from_raw(raw: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    /// Display name: a word for literal kinds, the symbol for punctuation.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Error => "Error",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Bool => "Boolean",
            TokenKind::Dot => ".",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Equals => "=",
            TokenKind::Comma => ",",
        }
    }

    /// Display name for a raw discriminant.
    ///
    /// Values outside the enumeration render as `Unknown(N)` instead of
    /// failing, so tooling reading raw kinds from elsewhere can still print
    /// them.
    pub fn name_of_raw(raw: u8) -> Cow<'static, str> {
        match Self::from_raw(raw) {
            Some(kind) => Cow::Borrowed(kind.name()),
            None => Cow::Owned(format!("Unknown({raw})")),
        }
    }

    /// Single-character punctuation kinds.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::Dot
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Colon
                | TokenKind::Equals
                | TokenKind::Comma
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single unit of lux source.
///
/// Literals that are slices of the source borrow from it; error messages are
/// owned. Use [`Token::into_owned`] to detach a token from its source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Raw payload text. Empty for punctuation and EOF.
    pub literal: Cow<'src, str>,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, literal: impl Into<Cow<'src, str>>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Token without a literal (punctuation, EOF).
    pub fn bare(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            literal: Cow::Borrowed(""),
            span,
        }
    }

    /// Error token whose literal is the message of `error`.
    pub fn error(error: LexError, span: Span) -> Self {
        Token {
            kind: TokenKind::Error,
            literal: Cow::Owned(error.to_string()),
            span,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Copy out the literal so the token no longer borrows the source.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            literal: Cow::Owned(self.literal.into_owned()),
            span: self.span,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_empty() {
            write!(f, "[{}] '{}'.", self.span, self.kind)
        } else {
            write!(
                f,
                "[{}] '{}' with value \"{}\".",
                self.span, self.kind, self.literal
            )
        }
    }
}
