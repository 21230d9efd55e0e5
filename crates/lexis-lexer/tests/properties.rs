//! Property tests for the scanner's whole-stream guarantees.

use lexis_lexer::{ScanMode, Scanner, SkipPolicy, TokenKind};
use proptest::prelude::*;

/// Fragments that always lex cleanly and carry no escapes.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z_][A-Za-z0-9_]{0,8}",
        "[0-9]{1,6}",
        "[0-9]{1,4}\\.[0-9]{0,4}",
        "-[0-9]{1,4}",
        "0x[0-9a-fA-F]{1,6}",
        "\"[a-z ]{0,8}\"",
        "//[a-z ]{0,8}",
        "/\\*[a-z \n]{0,8}\\*/",
        "[ \t\r]{1,3}|\n",
        prop_oneof![
            Just(">="),
            Just("<="),
            Just("!="),
            Just("=="),
            Just("="),
            Just("+"),
            Just("("),
            Just(")"),
            Just(";"),
        ]
        .prop_map(str::to_string),
    ]
}

/// Fragments joined by a newline so neighbours cannot merge into
/// unexpected lexemes (e.g. `1` followed by `.5`).
fn program() -> impl Strategy<Value = String> {
    proptest::collection::vec(fragment(), 0..24).prop_map(|parts| parts.join("\n"))
}

proptest! {
    #[test]
    fn identifier_input_is_one_token(ident in "[A-Za-z_][A-Za-z0-9_]{0,32}") {
        let tokens = Scanner::tokenize(&ident, SkipPolicy::NONE).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].text, &ident);
    }

    #[test]
    fn token_texts_round_trip(source in program()) {
        let tokens = Scanner::tokenize(&source, SkipPolicy::NONE).unwrap();
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, source);
    }

    #[test]
    fn lexemes_round_trip_for_any_ascii(source in "[ -~\t\n]{0,64}") {
        let mut scanner = Scanner::new(&source);
        let mut joined = String::new();
        // Literal mode never fails, so every printable input is covered.
        while let Some(token) = scanner.scan(SkipPolicy::NONE, ScanMode::Literal).unwrap() {
            prop_assert!(!token.text.is_empty());
            joined.push_str(scanner.lexeme(&token));
        }
        prop_assert!(scanner.is_completed());
        prop_assert_eq!(joined, source);
    }

    #[test]
    fn skip_all_on_trivia_reports_completion(source in "[ \t\r\n]{0,32}") {
        let mut scanner = Scanner::new(&source);
        prop_assert!(!scanner.next_token(SkipPolicy::SKIP_ALL).unwrap());
        prop_assert!(scanner.is_completed());
    }

    #[test]
    fn skip_all_never_yields_trivia(source in program()) {
        let tokens = Scanner::tokenize(&source, SkipPolicy::SKIP_ALL).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.kind.is_trivia()));
    }

    #[test]
    fn spans_are_contiguous(source in program()) {
        let tokens = Scanner::tokenize(&source, SkipPolicy::NONE).unwrap();
        let mut end = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start, end);
            prop_assert!(token.span.end > token.span.start);
            end = token.span.end;
        }
        prop_assert_eq!(end, source.len());
    }
}
