use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::cursor::{Position, SourceCursor};
use crate::diagnostic;
use crate::skip::SkipPolicy;
use crate::token::{Span, Token, TokenKind};
use crate::{LexerError, LexerErrorKind};

mod comment;
mod number;
mod operator;
mod string;
mod trivia;
mod word;

/// Classification strategy for the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Numbers, strings and comments are recognized.
    #[default]
    Full,
    /// Digits are identifier characters; quotes, slashes and `-` are plain
    /// operators. Used to re-tokenize raw embedded text.
    Literal,
}

/// Pull-based source scanner.
///
/// Each call to [`next_token`](Self::next_token) classifies one token and
/// stores it for [`token`](Self::token). Errors abort the current call only;
/// there is no resynchronization.
///
/// Layout:
/// - `Vec<char>` source for index-based navigation
/// - one sub-scanner per token kind, selected by the current character
/// - position tracking on every token
pub struct Scanner<'a> {
    cursor: SourceCursor<'a>,
    token: Option<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: SourceCursor::new(source),
            token: None,
        }
    }

    /// Tokenize the entire source in full mode.
    pub fn tokenize(source: &str, policy: SkipPolicy) -> Result<Vec<Token>, LexerError> {
        Scanner::new(source).tokens(policy, ScanMode::Full).collect()
    }

    /// Scan the next token in full mode.
    ///
    /// Returns `Ok(false)` when the input ran out before a token could be
    /// produced.
    pub fn next_token(&mut self, policy: SkipPolicy) -> Result<bool, LexerError> {
        self.pull(policy, ScanMode::Full)
    }

    /// Scan the next token in [`ScanMode::Literal`].
    pub fn next_token_literal_mode(&mut self, policy: SkipPolicy) -> Result<bool, LexerError> {
        self.pull(policy, ScanMode::Literal)
    }

    /// Scan the next token and hand it to the caller.
    ///
    /// Leaves [`token`](Self::token) empty.
    pub fn scan(
        &mut self,
        policy: SkipPolicy,
        mode: ScanMode,
    ) -> Result<Option<Token>, LexerError> {
        self.token = None;
        self.dispatch(policy, mode)
    }

    /// Iterate over the remaining tokens. The iterator stops after the
    /// first error.
    pub fn tokens(&mut self, policy: SkipPolicy, mode: ScanMode) -> Tokens<'_, 'a> {
        Tokens {
            scanner: self,
            policy,
            mode,
            failed: false,
        }
    }

    /// The token produced by the last successful `next_token*` call.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Whether the whole input has been consumed.
    pub fn is_completed(&self) -> bool {
        self.cursor.is_exhausted()
    }

    pub fn current_position(&self) -> Position {
        self.cursor.position()
    }

    /// Caret pointer at the current position, for diagnostics.
    pub fn pointer_info(&self) -> String {
        diagnostic::render_pointer(self.cursor.source(), self.cursor.position())
    }

    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Raw source text of a token produced by this scanner.
    pub fn lexeme(&self, token: &Token) -> &'a str {
        &self.cursor.source()[token.span.range()]
    }

    fn pull(&mut self, policy: SkipPolicy, mode: ScanMode) -> Result<bool, LexerError> {
        self.token = None;
        self.token = self.dispatch(policy, mode)?;
        Ok(self.token.is_some())
    }

    /// Route the current character to a sub-scanner, swallowing trivia the
    /// policy suppresses.
    fn dispatch(
        &mut self,
        policy: SkipPolicy,
        mode: ScanMode,
    ) -> Result<Option<Token>, LexerError> {
        loop {
            let Some(ch) = self.cursor.try_current() else {
                return Ok(None);
            };

            let result = match ch {
                ' ' | '\t' | '\r' if policy.skips_space() => {
                    self.skip_space();
                    continue;
                }
                ' ' | '\t' | '\r' => Ok(self.scan_space()),
                '\n' if policy.skips_newline() => {
                    self.skip_newlines();
                    continue;
                }
                '\n' => Ok(self.scan_newline()),
                c if is_identifier_start(c, mode) => Ok(self.scan_identifier(mode)),
                c if is_unexpected(c) => Ok(self.scan_unexpected()),
                _ if mode == ScanMode::Literal => Ok(self.scan_operator()),
                '0'..='9' => self.scan_number(false),
                '-' if self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit()) => {
                    self.scan_number(true)
                }
                '"' => self.scan_string(),
                '/' => self.scan_slash(),
                _ => Ok(self.scan_operator()),
            };

            return match result {
                Ok(token) => {
                    trace!(
                        kind = ?token.kind,
                        line = token.span.line,
                        column = token.span.column,
                        "token"
                    );
                    Ok(Some(token))
                }
                Err(err) => {
                    debug!(
                        kind = ?err.kind,
                        line = err.line,
                        column = err.column,
                        "lexer error"
                    );
                    Err(err)
                }
            };
        }
    }

    // --- Helpers shared by the sub-scanners ---

    fn finish(&self, kind: TokenKind, text: String, start: Position) -> Token {
        let end = self.cursor.position();
        Token::new(
            kind,
            text,
            Span::new(start.byte, end.byte, start.line, start.column),
        )
    }

    fn error(&self, kind: LexerErrorKind, at: Position) -> LexerError {
        LexerError::new(kind, self.cursor.source(), at)
    }

    /// Guard for sub-scanner entry conditions. A mismatch is a routing bug.
    fn expect_current(&self, what: &str, pred: impl Fn(char) -> bool) {
        let found = self.cursor.try_current();
        assert!(
            found.is_some_and(pred),
            "{what} sub-scanner invoked on {found:?} at offset {}",
            self.cursor.position().offset
        );
    }
}

/// Iterator over a scanner's remaining tokens.
pub struct Tokens<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
    policy: SkipPolicy,
    mode: ScanMode,
    failed: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.scanner.scan(self.policy, self.mode) {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

fn is_identifier_start(c: char, mode: ScanMode) -> bool {
    match mode {
        ScanMode::Full => c == '_' || c.is_ascii_alphabetic(),
        ScanMode::Literal => c == '_' || c.is_ascii_alphanumeric(),
    }
}

fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Characters outside the repertoire the scanner classifies.
fn is_unexpected(c: char) -> bool {
    !c.is_ascii() || (c.is_ascii_control() && !matches!(c, '\t' | '\r' | '\n'))
}
