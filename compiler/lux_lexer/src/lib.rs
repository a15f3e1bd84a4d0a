//! Lexer for the lux configuration language.
//!
//! Turns a [`SourceText`] into [`Token`]s with byte-exact spans:
//!
//! ```
//! use lux_lexer::{Scanner, TokenKind};
//! use lux_text::SourceText;
//!
//! let source = SourceText::new("enabled: true").unwrap_or_else(|e| panic!("{e}"));
//! let mut scanner = Scanner::new(&source);
//!
//! let ident = scanner.next_token();
//! assert_eq!(ident.kind, TokenKind::Ident);
//! assert_eq!(ident.to_string(), "[0..7] 'Identifier' with value \"enabled\".");
//! assert_eq!(scanner.next_token().kind, TokenKind::Colon);
//! assert_eq!(scanner.next_token().kind, TokenKind::Bool);
//! assert_eq!(scanner.next_token().kind, TokenKind::Eof);
//! ```
//!
//! Only the lexical layer lives here. Words such as `rule` or `extension`
//! are plain identifiers; giving them structure is the parser's job.

pub mod cursor;
mod lex_error;
mod scanner;
mod token;

pub use lex_error::LexError;
pub use scanner::{Scanner, Tokens};
pub use token::{Token, TokenKind};

use lux_text::SourceText;

/// Scan all of `source`. The last token is always EOF.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &SourceText) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Scanner::new(source).tokens().collect();
    tracing::debug!(
        tokens = tokens.len(),
        errors = tokens.iter().filter(|t| t.is_error()).count(),
        "lexing complete"
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_ends_with_single_eof() {
        let source = SourceText::new("a = 1").unwrap_or_else(|e| panic!("{e}"));
        let tokens = lex(&source);
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Ident,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn lex_empty_source() {
        let source = SourceText::new("").unwrap_or_else(|e| panic!("{e}"));
        let tokens = lex(&source);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }
}
