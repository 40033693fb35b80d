//! Expression parsers, one function per precedence level

use crate::ast::expression::{BinOpKind, BinaryOp, Call, Expression, VarRef};
use crate::lexer::{identifier, integer_literal, keyword, operator, string_literal};
use crate::parser::Location;
use crate::parser::combinators::{BoxedParser, constant, zero_or_more};

/// arguments := expression ("," expression)* | <nothing>
pub fn arguments(expression: BoxedParser<Expression>) -> BoxedParser<Vec<Expression>> {
    let list = (expression.clone() + zero_or_more(operator(",") * expression))
        >> |(first, rest): (Expression, Vec<Expression>)| {
            let mut arguments = Vec::with_capacity(rest.len() + 1);
            arguments.push(first);
            arguments.extend(rest);
            arguments
        };
    list | constant(Vec::new())
}

/// "(" arguments ")"
pub fn parenthesized_arguments(expression: BoxedParser<Expression>) -> BoxedParser<Vec<Expression>> {
    operator("(") * arguments(expression) - operator(")").or_error("expected ')'")
}

/// call := identifier "(" arguments ")"
pub fn call(expression: BoxedParser<Expression>) -> BoxedParser<Call> {
    (identifier() + parenthesized_arguments(expression))
        >> |(name, arguments)| Call {
            name: name.text.into(),
            arguments,
            location: name.location,
        }
}

/// factor := integer | string | call | variable | "(" expression ")"
fn factor(expression: BoxedParser<Expression>) -> BoxedParser<Expression> {
    let integer = integer_literal() >> Expression::Integer;
    let string = string_literal() >> Expression::String;
    let call = call(expression.clone()) >> Expression::Call;
    let variable = identifier()
        >> |name| {
            Expression::VarRef(VarRef {
                name: name.text.into(),
                location: name.location,
            })
        };
    let parenthesized = operator("(") * expression - operator(")").or_error("expected ')'");

    integer | string | call | variable | parenthesized
}

fn binary_operator(kind: BinOpKind) -> BoxedParser<(BinOpKind, Location)> {
    let token = match kind {
        BinOpKind::Div | BinOpKind::Mod => keyword(kind.symbol()),
        _ => operator(kind.symbol()),
    };
    token >> move |token| (kind, token.location)
}

/// First alternative wins, so longer spellings (`<=`) go before their prefixes (`<`)
fn one_of(first: BinOpKind, rest: &[BinOpKind]) -> BoxedParser<(BinOpKind, Location)> {
    rest.iter()
        .fold(binary_operator(first), |choice, kind| choice | binary_operator(*kind))
}

/// operand (op operand)*, folded to the left. Each node is located at its operator.
fn left_assoc(
    operand: BoxedParser<Expression>,
    operators: BoxedParser<(BinOpKind, Location)>,
) -> BoxedParser<Expression> {
    (operand.clone() + zero_or_more(operators + operand))
        >> |(first, rest): (Expression, Vec<((BinOpKind, Location), Expression)>)| {
            rest.into_iter()
                .fold(first, |left, ((op, location), right)| {
                    Expression::BinaryOp(BinaryOp {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                        location,
                    })
                })
        }
}

/// expression := relational (("=" | "<>") relational)*
/// relational := additive (("<=" | ">=" | "<" | ">") additive)*
/// additive   := term (("+" | "-") term)*
/// term       := factor (("*" | "div" | "mod") factor)*
///
/// `expression` is the forward reference used for nested expressions.
pub fn expression(expression: BoxedParser<Expression>) -> BoxedParser<Expression> {
    let term = left_assoc(
        factor(expression),
        one_of(BinOpKind::Mul, &[BinOpKind::Div, BinOpKind::Mod]),
    );
    let additive = left_assoc(term, one_of(BinOpKind::Add, &[BinOpKind::Sub]));
    let relational = left_assoc(
        additive,
        one_of(
            BinOpKind::LtEq,
            &[BinOpKind::GtEq, BinOpKind::Lt, BinOpKind::Gt],
        ),
    );
    left_assoc(relational, one_of(BinOpKind::Eq, &[BinOpKind::NotEq]))
}
