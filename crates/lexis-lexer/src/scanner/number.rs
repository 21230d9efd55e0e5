//! Number sub-scanner: decimal integers, floats and `0x` hexadecimals.

use super::Scanner;
use crate::token::{Token, TokenKind};
use crate::{LexerError, LexerErrorKind};

impl Scanner<'_> {
    /// Scan a number literal. With `negative`, the cursor sits on the `-`
    /// and the sign becomes part of the lexeme.
    pub(super) fn scan_number(&mut self, negative: bool) -> Result<Token, LexerError> {
        let start = self.cursor.position();
        let mut text = String::new();

        if negative {
            self.expect_current("negative number", |c| c == '-');
            text.push('-');
            self.cursor.advance();
        }
        self.expect_current("number", |c| c.is_ascii_digit());

        if self.cursor.current() == '0' && self.cursor.peek_next() == Some('x') {
            if negative {
                return Err(self.error(LexerErrorKind::NegativeHexadecimal, start));
            }
            return self.scan_hexadecimal(text);
        }

        let mut seen_dot = false;
        while let Some(c) = self.cursor.try_current() {
            match c {
                '0'..='9' => {}
                '.' if seen_dot => {
                    return Err(self.error(LexerErrorKind::DoubleDot, self.cursor.position()));
                }
                '.' => seen_dot = true,
                _ => break,
            }
            text.push(c);
            self.cursor.advance();
        }

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Ok(self.finish(kind, text, start))
    }

    /// Continue after the `0x` prefix; at least one hex digit is required.
    fn scan_hexadecimal(&mut self, mut text: String) -> Result<Token, LexerError> {
        let start = self.cursor.position();
        text.push_str("0x");
        self.cursor.advance();
        self.cursor.advance();

        let mut digits = 0;
        while let Some(c) = self.cursor.try_current() {
            match c {
                c if c.is_ascii_hexdigit() => {
                    text.push(c);
                    digits += 1;
                    self.cursor.advance();
                }
                '.' => {
                    return Err(self.error(LexerErrorKind::HexadecimalDot, self.cursor.position()));
                }
                _ => break,
            }
        }

        if digits == 0 {
            return Err(self.error(LexerErrorKind::MissingHexDigits, self.cursor.position()));
        }
        Ok(self.finish(TokenKind::Hexadecimal, text, start))
    }
}
