use minipas::lexer::{
    blank, identifier, integer_literal, keyword, operator, reserved_word, string_literal,
};
use minipas::parser::combinators::{BoxedParser, zero_or_more};
use minipas::parser::{Cursor, Location, Parser};
use rstest::rstest;

/// Runs `parser` once and returns its value plus the unconsumed text
fn lex_prefix<T: 'static>(parser: BoxedParser<T>, input: &str) -> Option<(T, String)> {
    let cursor = Cursor::new(input);
    parser
        .parse(&cursor)
        .expect("unexpected hard error")
        .map(|m| (m.value, m.cursor.rest().to_string()))
}

#[rstest]
#[case("foo")]
#[case("_tmp")]
#[case("x1_y2")]
#[case("division")]
#[case("endless")]
#[case("ifx")]
fn lex_identifiers(#[case] input: &str) {
    let token = identifier().parse_to_completion(input).unwrap();
    assert_eq!(token.text, input);
    assert_eq!(token.location, Location::new(1, 0));
}

#[rstest]
#[case("begin")]
#[case("END")]
#[case("Div")]
#[case("mod")]
#[case("then")]
fn reserved_words_are_not_identifiers(#[case] input: &str) {
    assert!(lex_prefix(identifier(), input).is_none());
    assert!(lex_prefix(reserved_word(), input).is_some());
}

#[test]
fn identifier_cannot_start_with_digit() {
    assert!(lex_prefix(identifier(), "1abc").is_none());
}

#[test]
fn identifier_keeps_its_spelling() {
    let token = identifier().parse_to_completion("xTimesTwo").unwrap();
    assert_eq!(token.text, "xTimesTwo");
}

#[test]
fn keyword_ignores_case_and_reports_source_spelling() {
    let (token, rest) = lex_prefix(keyword("begin"), "BeGiN x").unwrap();
    assert_eq!(token.text, "BeGiN");
    assert_eq!(rest, "x");
}

#[test]
fn keyword_must_end_at_word_boundary() {
    assert!(lex_prefix(keyword("div"), "division").is_none());
    assert!(lex_prefix(keyword("div"), "div_2").is_none());
    assert!(lex_prefix(keyword("div"), "div2").is_none());
    assert!(lex_prefix(keyword("div"), "div(2)").is_some());
}

#[test]
fn tokens_swallow_trailing_blank() {
    let (_, rest) = lex_prefix(operator(":="), ":=  { note }\n  5").unwrap();
    assert_eq!(rest, "5");
}

#[test]
fn operator_matches_exact_spelling() {
    assert!(lex_prefix(operator(":="), ": =").is_none());
    let (token, rest) = lex_prefix(operator("<"), "<>").unwrap();
    assert_eq!(token.text, "<");
    assert_eq!(rest, ">");
}

#[rstest]
#[case("0", 0)]
#[case("42", 42)]
#[case("007", 7)]
#[case("2147483647", i32::MAX)]
fn lex_integers(#[case] input: &str, #[case] expected: i32) {
    let literal = integer_literal().parse_to_completion(input).unwrap();
    assert_eq!(literal.value, expected);
}

#[test]
fn integer_overflow_is_a_hard_error() {
    let err = integer_literal().parse_to_completion("2147483648").unwrap_err();
    assert_eq!(err.message, "integer literal out of range");
}

#[test]
fn integer_overflow_reports_literal_line() {
    let parser = blank() * integer_literal();
    let err = parser.parse_to_completion("\n\n2147483648").unwrap_err();
    assert_eq!(err.line, 3);
}

#[rstest]
#[case("'hello'", "hello")]
#[case("''", "")]
#[case("'Enter a number: '", "Enter a number: ")]
#[case("'two\nlines'", "two\nlines")]
fn lex_string_literals(#[case] input: &str, #[case] expected: &str) {
    let literal = string_literal().parse_to_completion(input).unwrap();
    assert_eq!(literal.value, expected);
}

#[test]
fn unterminated_string_does_not_match() {
    assert!(lex_prefix(string_literal(), "'open").is_none());
}

#[test]
fn token_locations_track_lines() {
    let tokens = zero_or_more(identifier()).parse_to_completion("a\n b\n\n  c").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.location.line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
}
