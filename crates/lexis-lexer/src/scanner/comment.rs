//! Resolution of `/`: block comment, line comment or division operator.

use super::Scanner;
use crate::token::{Token, TokenKind};
use crate::{LexerError, LexerErrorKind};

impl Scanner<'_> {
    pub(super) fn scan_slash(&mut self) -> Result<Token, LexerError> {
        self.expect_current("slash", |c| c == '/');
        match self.cursor.peek_next() {
            Some('*') => self.scan_block_comment(),
            Some('/') => Ok(self.scan_line_comment()),
            _ => {
                let start = self.cursor.position();
                self.cursor.advance();
                Ok(self.finish(TokenKind::Operator, "/".to_string(), start))
            }
        }
    }

    /// `/* ... */`, delimiters included. Does not nest.
    fn scan_block_comment(&mut self) -> Result<Token, LexerError> {
        let start = self.cursor.position();
        let mut text = String::from("/*");
        self.cursor.advance();
        self.cursor.advance();

        loop {
            let Some(c) = self.cursor.try_current() else {
                return Err(self.error(LexerErrorKind::UnterminatedBlockComment, start));
            };
            text.push(c);
            self.cursor.advance();
            if c == '*' && self.cursor.try_current() == Some('/') {
                text.push('/');
                self.cursor.advance();
                break;
            }
        }

        Ok(self.finish(TokenKind::BlockComment, text, start))
    }

    /// `// ...` up to, not including, the next newline.
    fn scan_line_comment(&mut self) -> Token {
        let start = self.cursor.position();
        let mut text = String::new();
        self.cursor.eat_while(&mut text, |c| c != '\n');
        self.finish(TokenKind::LineComment, text, start)
    }
}
