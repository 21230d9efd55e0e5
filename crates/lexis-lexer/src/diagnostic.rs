//! Source pointers for error messages.
//!
//! Renders the last few lines up to a position, with a caret under the
//! column:
//!
//! ```text
//! 1 | let a = 1
//! 2 | let b = 0x
//!   |           ^
//! ```

use std::fmt::Write;

use crate::cursor::Position;

/// Number of source lines shown, including the pointed-at line.
pub const CONTEXT_LINES: usize = 3;

/// Render a caret pointer at `at` within `source`.
pub fn render_pointer(source: &str, at: Position) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let last = at.line.min(lines.len().saturating_sub(1));
    let first = last.saturating_sub(CONTEXT_LINES - 1);
    let width = (last + 1).to_string().len();

    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:>width$} | {}",
            idx + 1,
            line.trim_end_matches('\r')
        );
    }

    let padding: String = lines
        .get(last)
        .map(|line| {
            line.chars()
                .take(at.column)
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect()
        })
        .unwrap_or_default();
    let _ = write!(out, "{:>width$} | {padding}^", "");
    out
}
