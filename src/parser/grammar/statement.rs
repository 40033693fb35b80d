//! Statement parsers

use crate::ast::expression::{Call, Expression};
use crate::ast::statement::{Assignment, Compound, If, ProcedureCall, Statement, While};
use crate::lexer::{identifier, keyword, operator};
use crate::parser::combinators::{BoxedParser, maybe, zero_or_more};

use super::expression::parenthesized_arguments;

/// compound := "begin" (";"* statement)* ";"* "end"
///
/// Any number of semicolons may separate, lead or trail the statements.
pub fn compound(statement: BoxedParser<Statement>) -> BoxedParser<Statement> {
    let semicolons = zero_or_more(operator(";"));
    let statements = zero_or_more(semicolons.clone() * statement);
    (keyword("begin") + statements - semicolons - keyword("end").or_error("expected 'end'"))
        >> |(begin, statements)| {
            Statement::Compound(Compound {
                statements,
                location: begin.location,
            })
        }
}

/// if := "if" expression "then" statement ("else" statement)?
///
/// An `else` binds to the nearest unmatched `if`.
pub fn if_statement(
    expression: BoxedParser<Expression>,
    statement: BoxedParser<Statement>,
) -> BoxedParser<Statement> {
    let head = keyword("if") + expression - keyword("then").or_error("expected 'then'");
    let else_branch = maybe(keyword("else") * statement.clone());
    (head + statement + else_branch)
        >> |(((if_token, condition), then_branch), else_branch)| {
            Statement::If(If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: else_branch.map(Box::new),
                location: if_token.location,
            })
        }
}

/// while := "while" expression "do" statement
pub fn while_statement(
    expression: BoxedParser<Expression>,
    statement: BoxedParser<Statement>,
) -> BoxedParser<Statement> {
    let head = keyword("while") + expression - keyword("do").or_error("expected 'do'");
    (head + statement)
        >> |((while_token, condition), body)| {
            Statement::While(While {
                condition,
                body: Box::new(body),
                location: while_token.location,
            })
        }
}

/// assignment := identifier ":=" expression
pub fn assignment(expression: BoxedParser<Expression>) -> BoxedParser<Statement> {
    ((identifier() - operator(":=")) + expression)
        >> |(name, value)| {
            Statement::Assignment(Assignment {
                name: name.text.into(),
                value,
                location: name.location,
            })
        }
}

/// procedure := identifier ("(" arguments ")")?
pub fn procedure_call(expression: BoxedParser<Expression>) -> BoxedParser<Statement> {
    (identifier() + maybe(parenthesized_arguments(expression)))
        >> |(name, arguments)| {
            Statement::ProcedureCall(ProcedureCall {
                call: Call {
                    name: name.text.into(),
                    arguments: arguments.unwrap_or_default(),
                    location: name.location,
                },
            })
        }
}

/// statement := compound | if | while | assignment | procedure
///
/// Assignment is tried before procedure so `x := 1` is never read as a call to `x`.
pub fn statement(
    compound: BoxedParser<Statement>,
    expression: BoxedParser<Expression>,
    statement: BoxedParser<Statement>,
) -> BoxedParser<Statement> {
    compound
        | if_statement(expression.clone(), statement.clone())
        | while_statement(expression.clone(), statement)
        | assignment(expression.clone())
        | procedure_call(expression)
}
