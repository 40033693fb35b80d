//! Backtracking parser: cursor and results in [`state`], the combinator
//! algebra in [`combinators`], and the language rules in `grammar`.

pub mod combinators;
mod grammar;
pub mod state;

pub use grammar::{Grammar, parse};
pub use state::{Cursor, Location, Matched, ParseError, ParseResult, Parser};
