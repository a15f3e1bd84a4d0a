//! Lexical faults.
//!
//! The scanner never returns `Err`: each fault becomes one
//! [`TokenKind::Error`](crate::TokenKind::Error) token whose literal is the
//! `Display` text of a [`LexError`]. Those sentences are part of the
//! observable token stream, so their wording is fixed.

/// A malformed construct found while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Invalid character '{0}'.")]
    InvalidCharacter(char),

    /// End of input or a newline before the closing `"`.
    #[error("Unclosed string literal.")]
    UnclosedString,
}
