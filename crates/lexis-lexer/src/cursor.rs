//! Position tracking over an immutable source buffer.

/// A location in the source.
///
/// `line` and `column` are 0-based. `offset` counts chars, `byte` counts
/// UTF-8 bytes; both refer to the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub byte: usize,
}

/// Cursor over a borrowed source string.
///
/// The buffer is decoded to `Vec<char>` once for index-based navigation.
/// The offset only moves forward.
pub struct SourceCursor<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: Position,
}

impl<'a> SourceCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: Position::default(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// The character under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted. Sub-scanners only call this after
    /// checking bounds, so hitting it is a routing bug.
    pub fn current(&self) -> char {
        match self.chars.get(self.pos.offset) {
            Some(&c) => c,
            None => panic!(
                "cursor read past end of input (offset {}, length {})",
                self.pos.offset,
                self.chars.len()
            ),
        }
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn try_current(&self) -> Option<char> {
        self.chars.get(self.pos.offset).copied()
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos.offset + 1).copied()
    }

    pub fn peek_prev(&self) -> Option<char> {
        self.pos
            .offset
            .checked_sub(1)
            .and_then(|i| self.chars.get(i).copied())
    }

    /// Step over the current character.
    ///
    /// Returns whether the cursor still points at a character. Crossing a
    /// `\n` starts a new line at column 0. Does nothing once exhausted.
    pub fn advance(&mut self) -> bool {
        let Some(c) = self.try_current() else {
            return false;
        };
        self.pos.offset += 1;
        self.pos.byte += c.len_utf8();
        if c == '\n' {
            self.pos.line += 1;
            self.pos.column = 0;
        } else {
            self.pos.column += 1;
        }
        !self.is_exhausted()
    }

    /// Advance while `pred` holds for the current character, pushing each
    /// consumed character onto `out`.
    pub fn eat_while(&mut self, out: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.try_current() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.advance();
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos.offset >= self.chars.len()
    }
}
