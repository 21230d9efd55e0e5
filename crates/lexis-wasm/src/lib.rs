//! WASM bindings for the lexis tokenizer.
//!
//! Exposes `tokenize()` to JavaScript via wasm-bindgen.
//! Returns an array of `{ kind, text, span }` objects or throws on error.

use lexis_lexer::{LexerError, ScanMode, Scanner, SkipPolicy, Token};
use wasm_bindgen::prelude::*;

/// Tokenize source text.
///
/// `skip` is the raw skip-policy bit set (1 = spaces, 2 = newlines,
/// 3 = both); unknown bits are ignored. `literal` selects literal mode.
/// Throws a JS error carrying the rendered diagnostic on malformed input.
#[wasm_bindgen]
pub fn tokenize(source: &str, skip: u8, literal: bool) -> Result<JsValue, JsError> {
    let tokens = scan(source, skip, literal).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&tokens).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the tokenizer version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn scan(source: &str, skip: u8, literal: bool) -> Result<Vec<Token>, LexerError> {
    let mode = if literal {
        ScanMode::Literal
    } else {
        ScanMode::Full
    };
    Scanner::new(source)
        .tokens(SkipPolicy::from_bits_truncate(skip), mode)
        .collect()
}
