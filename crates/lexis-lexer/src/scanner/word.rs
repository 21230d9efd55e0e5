//! Identifier and unexpected-character sub-scanners.

use super::{is_identifier_continue, is_identifier_start, is_unexpected, ScanMode, Scanner};
use crate::token::{Token, TokenKind};

impl Scanner<'_> {
    /// Scan an identifier: `[A-Za-z_][A-Za-z0-9_]*`, or `[A-Za-z0-9_]+` in
    /// literal mode.
    pub(super) fn scan_identifier(&mut self, mode: ScanMode) -> Token {
        self.expect_current("identifier", |c| is_identifier_start(c, mode));
        let start = self.cursor.position();
        let mut text = String::new();
        self.cursor.eat_while(&mut text, is_identifier_continue);
        self.finish(TokenKind::Identifier, text, start)
    }

    /// Consume a single character the scanner does not classify.
    pub(super) fn scan_unexpected(&mut self) -> Token {
        self.expect_current("unexpected", is_unexpected);
        let start = self.cursor.position();
        let c = self.cursor.current();
        self.cursor.advance();
        self.finish(TokenKind::Unexpected, c.to_string(), start)
    }
}
