//! String literal sub-scanner.

use super::Scanner;
use crate::token::{Token, TokenKind};
use crate::{LexerError, LexerErrorKind};

/// Decode the character following a backslash.
fn unescape(c: char) -> Option<char> {
    Some(match c {
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        _ => return None,
    })
}

impl Scanner<'_> {
    /// Scan a double-quoted string. The token text keeps both quotes and
    /// carries the decoded content between them.
    pub(super) fn scan_string(&mut self) -> Result<Token, LexerError> {
        self.expect_current("string", |c| c == '"');
        let start = self.cursor.position();
        self.cursor.advance(); // consume opening quote

        let mut text = String::from('"');
        loop {
            let Some(c) = self.cursor.try_current() else {
                return Err(self.error(LexerErrorKind::UnterminatedString, start));
            };
            match c {
                '"' => break,
                '\\' => {
                    let escape_at = self.cursor.position();
                    self.cursor.advance(); // consume backslash
                    let Some(escaped) = self.cursor.try_current() else {
                        return Err(self.error(LexerErrorKind::UnterminatedString, start));
                    };
                    let decoded = unescape(escaped).ok_or_else(|| {
                        self.error(LexerErrorKind::UnexpectedEscape(escaped), escape_at)
                    })?;
                    text.push(decoded);
                }
                _ => text.push(c),
            }
            self.cursor.advance();
        }

        self.cursor.advance(); // consume closing quote
        text.push('"');
        Ok(self.finish(TokenKind::StringLiteral, text, start))
    }
}
