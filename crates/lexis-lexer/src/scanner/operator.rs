//! Operator sub-scanner, the dispatcher's fallback.

use super::Scanner;
use crate::token::{Token, TokenKind};

/// Two-character operators, preferred over their one-character prefix.
const COMPOSITE_OPERATORS: &[&str] = &[">=", "<=", "!=", "=="];

fn is_composite(first: char, second: char) -> bool {
    COMPOSITE_OPERATORS.iter().any(|op| {
        let mut chars = op.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    })
}

impl Scanner<'_> {
    pub(super) fn scan_operator(&mut self) -> Token {
        self.expect_current("operator", |c| !c.is_whitespace());
        let start = self.cursor.position();
        let first = self.cursor.current();
        let mut text = String::from(first);

        if let Some(second) = self.cursor.peek_next().filter(|&n| is_composite(first, n)) {
            text.push(second);
            self.cursor.advance();
        }
        self.cursor.advance();

        self.finish(TokenKind::Operator, text, start)
    }
}
