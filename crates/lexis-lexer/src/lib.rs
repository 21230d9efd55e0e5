//! Lexis Lexer
//!
//! Single-pass scanner that turns ASCII-centric source text into classified
//! tokens for a parser to consume: integer, float and hexadecimal numbers,
//! quoted strings with escapes, block and line comments, composite
//! operators, identifiers, and whitespace/newline trivia.
//!
//! Tokens are pulled one at a time with a [`SkipPolicy`] that decides
//! whether trivia is reported or swallowed.
//!
//! # Example
//!
//! ```
//! use lexis_lexer::{Scanner, SkipPolicy, TokenKind};
//!
//! let mut scanner = Scanner::new("x >= 0x1F");
//! let mut kinds = Vec::new();
//! while scanner.next_token(SkipPolicy::SKIP_SPACE).unwrap() {
//!     kinds.push(scanner.token().unwrap().kind);
//! }
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Operator, TokenKind::Hexadecimal]
//! );
//! assert!(scanner.is_completed());
//! ```

pub mod cursor;
pub mod diagnostic;
pub mod scanner;
pub mod skip;
pub mod token;

pub use cursor::{Position, SourceCursor};
pub use scanner::{ScanMode, Scanner, Tokens};
pub use skip::SkipPolicy;
pub use token::{Span, Token, TokenKind};

/// What went wrong while scanning a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexerErrorKind {
    #[error("expected at least one hexadecimal digit after `0x`")]
    MissingHexDigits,
    #[error("hexadecimal literal cannot contain `.`")]
    HexadecimalDot,
    #[error("negative hexadecimal literals are not supported")]
    NegativeHexadecimal,
    #[error("double dot in number literal")]
    DoubleDot,
    #[error("unexpected escape character `{0}`")]
    UnexpectedEscape(char),
    #[error("unterminated block comment, expected `*/`")]
    UnterminatedBlockComment,
    #[error("unterminated string literal, expected `\"`")]
    UnterminatedString,
}

/// Lexer error with position information.
///
/// `line` and `column` are 0-based; the rendered message shows them 1-based.
/// `context` is a caret pointer into the source (see [`diagnostic`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {}, column {}: {message}\n{context}", .line + 1, .column + 1)]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
}

impl LexerError {
    /// Build an error pointing at `at` in `source`.
    pub fn new(kind: LexerErrorKind, source: &str, at: Position) -> Self {
        Self {
            kind,
            message: kind.to_string(),
            line: at.line,
            column: at.column,
            context: diagnostic::render_pointer(source, at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display_is_one_based() {
        let at = Position {
            line: 0,
            column: 2,
            offset: 2,
            byte: 2,
        };
        let err = LexerError::new(LexerErrorKind::MissingHexDigits, "0x", at);
        assert_eq!(
            err.to_string(),
            "Lexer error at line 1, column 3: expected at least one hexadecimal digit after `0x`\n1 | 0x\n  |   ^"
        );
    }

    #[test]
    fn test_escape_kind_message() {
        assert_eq!(
            LexerErrorKind::UnexpectedEscape('q').to_string(),
            "unexpected escape character `q`"
        );
    }
}
