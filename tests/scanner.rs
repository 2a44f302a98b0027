//! Scanner behaviour and error tests.

use confscan::{KeywordSet, ScanErrorKind, Scanner, TokenKind, tokenize};
use pretty_assertions::assert_eq;

fn summary(input: &str) -> Vec<(TokenKind, &str)> {
    tokenize(input)
        .expect("tokenize")
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

// -----------------------------------------------------------
// Basic scanner behaviour.
// -----------------------------------------------------------

#[test]
fn scan_empty_input() {
    assert_eq!(summary(""), [(TokenKind::EndOfInput, "")]);
}

#[test]
fn scan_only_whitespace() {
    assert_eq!(summary("   \t  \n\n  \r\n"), [(TokenKind::EndOfInput, "")]);
}

#[test]
fn scan_assignment() {
    assert_eq!(
        summary("x = 10;"),
        [
            (TokenKind::Identifier, "x"),
            (TokenKind::Assign, "="),
            (TokenKind::Number, "10"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn scan_keyword_then_identifier() {
    assert_eq!(
        summary("FUNC add"),
        [
            (TokenKind::Keyword, "FUNC"),
            (TokenKind::Identifier, "add"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn scan_unknown_character() {
    assert_eq!(
        summary("@"),
        [(TokenKind::Unknown, "@"), (TokenKind::EndOfInput, "")]
    );
}

#[test]
fn scan_identifier_is_maximal() {
    assert_eq!(
        summary("myFunc2 _tmp_1"),
        [
            (TokenKind::Identifier, "myFunc2"),
            (TokenKind::Identifier, "_tmp_1"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn scan_keyword_needs_exact_match() {
    let kinds: Vec<_> = summary("VAR VARS var Var")
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn scan_number_keeps_leading_zeros() {
    assert_eq!(summary("007")[0], (TokenKind::Number, "007"));
}

#[test]
fn scan_number_has_no_fraction_or_sign() {
    assert_eq!(
        summary("-3.5"),
        [
            (TokenKind::Operator, "-"),
            (TokenKind::Number, "3"),
            (TokenKind::Unknown, "."),
            (TokenKind::Number, "5"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn scan_number_then_identifier() {
    assert_eq!(
        summary("12ab"),
        [
            (TokenKind::Number, "12"),
            (TokenKind::Identifier, "ab"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn scan_equality_comparison() {
    assert_eq!(
        summary("IF (a == b)"),
        [
            (TokenKind::Keyword, "IF"),
            (TokenKind::LParen, "("),
            (TokenKind::Identifier, "a"),
            (TokenKind::Equals, "=="),
            (TokenKind::Identifier, "b"),
            (TokenKind::RParen, ")"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn scan_original_demo_input() {
    let input = "#var:struct MyStruct { int x; int y; x = 10; y = 20; } subclusive:#";
    let tokens = summary(input);
    assert_eq!(tokens[0], (TokenKind::ConfigDirective, "#var"));
    assert_eq!(tokens[1], (TokenKind::Colon, ":"));
    assert_eq!(tokens[2], (TokenKind::Identifier, "struct"));
    assert_eq!(tokens[3], (TokenKind::Identifier, "MyStruct"));
    assert_eq!(tokens[4], (TokenKind::BraceOpen, "{"));
    let tail = &tokens[tokens.len() - 5..];
    assert_eq!(
        tail,
        [
            (TokenKind::BraceClose, "}"),
            (TokenKind::Identifier, "subclusive"),
            (TokenKind::Colon, ":"),
            (TokenKind::Unknown, "#"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn scan_directive_lines() {
    let input = "#! profile debug\n#! level 3\nVAR x = 1;\n";
    let tokens = summary(input);
    assert_eq!(tokens[0], (TokenKind::ConfigDirective, "#! profile debug"));
    assert_eq!(tokens[1], (TokenKind::ConfigDirective, "#! level 3"));
    assert_eq!(tokens[2], (TokenKind::Keyword, "VAR"));
}

#[test]
fn scan_long_line_of_markers() {
    let n = 200_000;
    let input = format!("x {}", "#!".repeat(n));
    let tokens = tokenize(&input).expect("tokenize");
    assert_eq!(tokens.len(), 2 * n + 2);
    let unknown = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Unknown)
        .count();
    assert_eq!(unknown, 2 * n);
}

#[test]
fn scan_directive_at_end_of_input() {
    assert_eq!(
        summary("#!"),
        [
            (TokenKind::ConfigDirective, "#!"),
            (TokenKind::EndOfInput, "")
        ]
    );
}

#[test]
fn scan_string_spanning_lines() {
    let tokens = tokenize("\"a\nb\" c").expect("tokenize");
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "a\nb");
    assert_eq!(tokens[1].text, "c");
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 4);
}

#[test]
fn scan_with_empty_keyword_set() {
    let tokens: Vec<_> = Scanner::with_keywords("FUNC", KeywordSet::empty())
        .collect::<Result<_, _>>()
        .expect("tokenize");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
}

#[test]
fn scan_is_deterministic() {
    let input = "STRUCT p { INT x; } #! tail\n\"s\" 0 @";
    assert_eq!(tokenize(input), tokenize(input));
}

// -----------------------------------------------------------
// Positions.
// -----------------------------------------------------------

#[test]
fn positions_reset_after_newline() {
    let tokens = tokenize("ab cd\n\n\tef").expect("tokenize");
    let positions: Vec<_> = tokens
        .iter()
        .map(|t| (t.span.line, t.span.column))
        .collect();
    assert_eq!(positions, [(1, 1), (1, 4), (3, 2), (3, 4)]);
}

#[test]
fn end_of_input_span_is_at_end() {
    let tokens = tokenize("x\n").expect("tokenize");
    let eof = tokens.last().expect("eof token");
    assert_eq!(eof.span.line, 2);
    assert_eq!(eof.span.column, 1);
    assert_eq!(eof.span.offset, 2);
}

#[test]
fn token_display_layout() {
    let tokens = tokenize("\n  x").expect("tokenize");
    assert_eq!(
        tokens[0].to_string(),
        "Token: IDENTIFIER, Text: 'x', Line: 2, Column: 3"
    );
    assert_eq!(
        tokens[1].to_string(),
        "Token: EOF, Text: '', Line: 2, Column: 4"
    );
}

#[test]
fn diagnostic_only_for_unknown() {
    let tokens = tokenize("a $").expect("tokenize");
    assert_eq!(tokens[0].diagnostic(), None);
    assert_eq!(
        tokens[1].diagnostic().as_deref(),
        Some("invalid character '$'")
    );
}

// -----------------------------------------------------------
// Scan errors.
// -----------------------------------------------------------

#[test]
fn error_unterminated_string() {
    let err = tokenize("\"hello").unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
}

#[test]
fn error_display_includes_location() {
    let err = tokenize("a = 1;\nb = \"open").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unterminated string literal at line 2, column 5"
    );
}

#[test]
fn error_after_valid_tokens_stops_iteration() {
    let mut scanner = Scanner::new("x \"y");
    assert_eq!(
        scanner.next().map(|r| r.map(|t| t.text)),
        Some(Ok("x"))
    );
    assert!(matches!(scanner.next(), Some(Err(_))));
    assert!(scanner.next().is_none());
}
