//! Lexical rules, written with the same combinators as the grammar.
//!
//! There is no separate token stream: each token parser matches its text,
//! records where it started, and then swallows any trailing blank
//! (whitespace and `{ ... }` comments) so the next rule starts on real input.

use crate::ast::expression::{IntegerLiteral, StringLiteral};
use crate::parser::combinators::{
    BoxedParser, not, one_or_more, range, symbol, text, until, zero_or_more,
};
use crate::parser::{Location, ParseError};

/// Reserved words; never accepted as identifiers
pub const KEYWORDS: [&str; 10] = [
    "begin", "div", "do", "else", "end", "if", "mod", "then", "var", "while",
];

/// Text of a matched operator, keyword or identifier and where it started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub location: Location,
}

pub fn whitespace() -> BoxedParser<char> {
    symbol(' ') | symbol('\t') | symbol('\n') | symbol('\r')
}

/// `{ ... }`; the first `}` closes the comment, there is no nesting
pub fn block_comment() -> BoxedParser<String> {
    symbol('{') * until('}').or_error("expected '}' before end of source")
}

/// One or more whitespace characters or comments
pub fn blank() -> BoxedParser<()> {
    let piece = (whitespace() >> |_| ()) | (block_comment() >> |_| ());
    one_or_more(piece) >> |_| ()
}

pub fn letter() -> BoxedParser<char> {
    symbol('_') | range('a', 'z') | range('A', 'Z')
}

pub fn digit() -> BoxedParser<char> {
    range('0', '9')
}

fn identifier_continuation() -> BoxedParser<char> {
    letter() | digit()
}

/// Punctuation such as `:=` or `<>`
pub fn operator(spelling: &str) -> BoxedParser<Token> {
    let token = text(spelling, false).located() >> |(text, location)| Token { text, location };
    token.skip(blank())
}

/// A reserved word in any case, not followed by an identifier character,
/// so `division` is never read as `div` + `ision`
pub fn keyword(spelling: &str) -> BoxedParser<Token> {
    let word = text(spelling, true).located() - not(identifier_continuation());
    let token = word >> |(text, location)| Token { text, location };
    token.skip(blank())
}

/// Any of [`KEYWORDS`]
pub fn reserved_word() -> BoxedParser<Token> {
    KEYWORDS[1..]
        .iter()
        .fold(keyword(KEYWORDS[0]), |words, next| words | keyword(next))
}

/// A letter or underscore followed by letters, digits and underscores,
/// provided the whole word is not reserved
pub fn identifier() -> BoxedParser<Token> {
    let spelling = (letter() + zero_or_more(identifier_continuation())).map(|(first, rest)| {
        let mut name = String::with_capacity(rest.len() + 1);
        name.push(first);
        name.extend(rest);
        name
    });
    let token = spelling.located() >> |(text, location)| Token { text, location };
    (not(reserved_word()) * token).skip(blank())
}

/// Decimal digits as an `i32`; a literal that does not fit is a hard error
pub fn integer_literal() -> BoxedParser<IntegerLiteral> {
    let literal = one_or_more(digit()).located().try_map(|(digits, location)| {
        let digits: String = digits.into_iter().collect();
        match digits.parse::<i32>() {
            Ok(value) => Ok(IntegerLiteral { value, location }),
            Err(_) => Err(ParseError::new("integer literal out of range").at(location.line)),
        }
    });
    literal.skip(blank())
}

/// `'...'` up to the next quote; there is no escape for an embedded quote
pub fn string_literal() -> BoxedParser<StringLiteral> {
    let quoted = (symbol('\'') * until('\'')).located().map(|(body, location)| {
        let value = body.strip_suffix('\'').unwrap_or(body.as_str()).to_string();
        StringLiteral { value, location }
    });
    quoted.skip(blank())
}
