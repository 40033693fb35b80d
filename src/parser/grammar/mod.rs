//! Grammar for the language, built from the combinators in
//! [`crate::parser::combinators`] and the token rules in [`crate::lexer`]:
//! - `expression`: factors and the binary precedence ladder
//! - `statement`: compound, `if`, `while`, assignment and procedure calls
//! - `declaration`: the `var` section
//!
//! Expressions and statements nest, so both are reached through forward
//! references that are filled in once every rule exists. The references
//! form `Rc` cycles, which [`Grammar`] breaks when dropped.

mod declaration;
mod expression;
mod statement;

use log::debug;

use crate::ast::expression::Expression;
use crate::ast::statement::Statement;
use crate::ast::{Declaration, Unit};
use crate::lexer::{blank, operator};

use super::combinators::{BoxedParser, Forward, forward, maybe};
use super::state::ParseError;

use declaration::var_section;

/// program := blank? var_section? compound "."
fn program(compound: BoxedParser<Statement>) -> BoxedParser<Unit> {
    let declarations =
        maybe(var_section()) >> |section: Option<Vec<Declaration>>| section.unwrap_or_default();
    (maybe(blank()) * declarations + compound - operator(".").or_error("expected '.'"))
        >> |(declarations, main)| Unit { declarations, main }
}

/// All rules of the language, wired together
pub struct Grammar {
    expression: Forward<Expression>,
    statement: Forward<Statement>,
    program: BoxedParser<Unit>,
}

impl Grammar {
    pub fn new() -> Self {
        let expression_rule = forward::<Expression>();
        let statement_rule = forward::<Statement>();

        expression_rule.define(expression::expression(expression_rule.parser()));

        let compound = statement::compound(statement_rule.parser());
        statement_rule.define(statement::statement(
            compound.clone(),
            expression_rule.parser(),
            statement_rule.parser(),
        ));

        Self {
            expression: expression_rule,
            statement: statement_rule,
            program: program(compound),
        }
    }

    /// Parse a whole program. The input must be consumed entirely.
    pub fn parse(&self, source: &str) -> Result<Unit, ParseError> {
        self.program.parse_to_completion(source)
    }

    /// Parse a lone expression, surrounded by optional blank
    pub fn parse_expression(&self, source: &str) -> Result<Expression, ParseError> {
        (maybe(blank()) * self.expression.parser()).parse_to_completion(source)
    }

    /// Parse a lone statement, surrounded by optional blank
    pub fn parse_statement(&self, source: &str) -> Result<Statement, ParseError> {
        (maybe(blank()) * self.statement.parser()).parse_to_completion(source)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Grammar {
    fn drop(&mut self) {
        self.expression.clear();
        self.statement.clear();
    }
}

/// Parse `source` into a [`Unit`].
///
/// A syntax error carries the line it was found on. When no rule reports a
/// specific error, the message is `expected end of source` at the line of the
/// furthest point any rule reached.
pub fn parse(source: &str) -> Result<Unit, ParseError> {
    debug!("parsing {} bytes", source.len());
    let unit = Grammar::new().parse(source)?;
    debug!("parsed {} declaration(s)", unit.declarations.len());
    Ok(unit)
}
