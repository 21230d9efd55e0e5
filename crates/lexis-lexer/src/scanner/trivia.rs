//! Space and newline sub-scanners.

use super::Scanner;
use crate::token::{Token, TokenKind};

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

impl Scanner<'_> {
    /// Coalesce a run of spaces, tabs and carriage returns into one token.
    pub(super) fn scan_space(&mut self) -> Token {
        self.expect_current("space", is_space);
        let start = self.cursor.position();
        let mut text = String::new();
        self.cursor.eat_while(&mut text, is_space);
        self.finish(TokenKind::Space, text, start)
    }

    pub(super) fn skip_space(&mut self) {
        while self.cursor.try_current().is_some_and(is_space) {
            self.cursor.advance();
        }
    }

    /// Emit exactly one `\n`.
    pub(super) fn scan_newline(&mut self) -> Token {
        self.expect_current("newline", |c| c == '\n');
        let start = self.cursor.position();
        self.cursor.advance();
        self.finish(TokenKind::EndOfLine, "\n".to_string(), start)
    }

    pub(super) fn skip_newlines(&mut self) {
        while self.cursor.try_current() == Some('\n') {
            self.cursor.advance();
        }
    }
}
