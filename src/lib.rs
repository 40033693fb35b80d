//! # minipas - front end for a small Pascal-like language
//!
//! Source text is parsed by a backtracking parser built from composable
//! combinators. There is no separate tokenizer: lexical rules (whitespace,
//! `{ ... }` comments, keywords, identifiers, literals) are combinators too.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (&str)
//!     ↓
//! [Parser] → ast::Unit
//!     ↓
//! [Analysis] → declaration diagnostics + resolved types
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - cursor, combinator algebra and the grammar
//! - [`lexer`] - token-level rules written with the same combinators
//! - [`ast`] - syntax tree and the [`ast::visitor::Visitor`] protocol
//! - [`fmt`] - prints a tree back as normalized source
//! - [`analysis`] - checks the `var` section
//!
//! ## Example Program
//!
//! ```text
//! var
//!   x: integer;
//!
//! begin
//!   x := 10 div 2;
//!   if x <> 5 then WriteLn('odd') else Inc(x)
//! end.
//! ```
//!
//! ```
//! let unit = minipas::parse("begin x := 10 div 2 end.").unwrap();
//! assert!(unit.declarations.is_empty());
//! ```

pub mod analysis;
pub mod ast;
pub mod fmt;
pub mod lexer;
pub mod parser;

pub use parser::parse;
