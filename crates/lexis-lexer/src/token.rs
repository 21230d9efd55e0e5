use std::ops::Range;

/// Location of a token's raw lexeme in the source.
///
/// `start`/`end` are UTF-8 byte offsets; `line`/`column` locate the first
/// character and are 0-based, like [`Position`](crate::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Byte range of the lexeme, suitable for slicing the source.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification.
///
/// Closed set: the scanner never produces anything outside these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// One or more contiguous spaces, tabs or carriage returns.
    Space,
    Integer,
    Float,
    /// `0x` followed by at least one hex digit.
    Hexadecimal,
    Identifier,
    Operator,
    /// Quoted string; the token text is decoded.
    StringLiteral,
    /// `/* ... */`, delimiters included.
    BlockComment,
    /// `// ...` up to (not including) the newline.
    LineComment,
    /// A single `\n`.
    EndOfLine,
    /// A character outside the ASCII repertoire the scanner classifies.
    Unexpected,
}

impl TokenKind {
    /// Whitespace-like kinds that a [`SkipPolicy`](crate::SkipPolicy) can suppress.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::EndOfLine)
    }
}

/// A token produced by the scanner.
///
/// Owned by the caller; holds no reference back into the scanner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// The lexeme. For string literals the escapes are resolved, quotes kept.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Decoded content of a string literal, without the surrounding quotes.
    ///
    /// Returns `None` for every other kind.
    pub fn string_value(&self) -> Option<&str> {
        if self.kind != TokenKind::StringLiteral {
            return None;
        }
        self.text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_span_range() {
        let span = Span::new(3, 7, 0, 3);
        assert_eq!(span.range(), 3..7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_string_value_strips_quotes() {
        let token = Token::new(
            TokenKind::StringLiteral,
            "\"a\nb\"",
            Span::new(0, 7, 0, 0),
        );
        assert_eq!(token.string_value(), Some("a\nb"));
    }

    #[test]
    fn test_string_value_empty_literal() {
        let token = Token::new(TokenKind::StringLiteral, "\"\"", Span::new(0, 2, 0, 0));
        assert_eq!(token.string_value(), Some(""));
    }

    #[test]
    fn test_string_value_other_kinds() {
        let token = Token::new(TokenKind::Identifier, "abc", Span::new(0, 3, 0, 0));
        assert_eq!(token.string_value(), None);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::Space.is_trivia());
        assert!(TokenKind::EndOfLine.is_trivia());
        assert!(!TokenKind::Operator.is_trivia());
        assert!(!TokenKind::LineComment.is_trivia());
    }
}
