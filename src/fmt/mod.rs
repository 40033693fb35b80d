//! Source printer.
//!
//! `Display` for [`Unit`], [`Statement`] and [`Expression`] writes source
//! text that parses back to an equal tree. Binary operations get parentheses
//! only where precedence or left associativity requires them.

use std::fmt::{self, Display};

use crate::ast::expression::{BinaryOp, Call, Expression};
use crate::ast::statement::Statement;
use crate::ast::{Declaration, Unit};

const INDENT: &str = "  ";

struct Formatter {
    buffer: String,
    indent_level: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();

        if !self.declarations.is_empty() {
            formatter.write_str("var");
            formatter.write_newline();
            formatter.indent();
            for declaration in &self.declarations {
                formatter.write_indent();
                format_declaration(declaration, &mut formatter);
                formatter.write_newline();
            }
            formatter.dedent();
            formatter.write_newline();
        }

        format_statement(&self.main, &mut formatter);
        formatter.write_str(".");
        formatter.write_newline();

        f.write_str(&formatter.finish())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_statement(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_expression(self, &mut formatter, 0);
        f.write_str(&formatter.finish())
    }
}

fn format_declaration(declaration: &Declaration, fmt: &mut Formatter) {
    match declaration {
        Declaration::Var(var) => {
            fmt.write_str(var.name.as_str());
            fmt.write_str(": ");
            fmt.write_str(var.type_name.as_str());
            fmt.write_str(";");
        }
    }
}

/// Writes `stmt` starting at the current column; nested lines are indented
/// one level deeper than the current indent.
fn format_statement(stmt: &Statement, fmt: &mut Formatter) {
    match stmt {
        Statement::Compound(compound) => {
            fmt.write_str("begin");
            fmt.write_newline();
            fmt.indent();
            for (i, inner) in compound.statements.iter().enumerate() {
                fmt.write_indent();
                format_statement(inner, fmt);
                if i + 1 < compound.statements.len() {
                    fmt.write_str(";");
                }
                fmt.write_newline();
            }
            fmt.dedent();
            fmt.write_indent();
            fmt.write_str("end");
        }
        Statement::If(if_stmt) => {
            fmt.write_str("if ");
            format_expression(&if_stmt.condition, fmt, 0);
            fmt.write_str(" then");
            match &if_stmt.else_branch {
                Some(else_branch) => {
                    // `else` would otherwise attach to the open `if` inside the then branch
                    if ends_with_open_if(&if_stmt.then_branch) {
                        format_nested(&wrap_in_compound(&if_stmt.then_branch), fmt);
                    } else {
                        format_nested(&if_stmt.then_branch, fmt);
                    }
                    fmt.write_newline();
                    fmt.write_indent();
                    fmt.write_str("else");
                    format_nested(else_branch, fmt);
                }
                None => format_nested(&if_stmt.then_branch, fmt),
            }
        }
        Statement::While(while_stmt) => {
            fmt.write_str("while ");
            format_expression(&while_stmt.condition, fmt, 0);
            fmt.write_str(" do");
            format_nested(&while_stmt.body, fmt);
        }
        Statement::Assignment(assignment) => {
            fmt.write_str(assignment.name.as_str());
            fmt.write_str(" := ");
            format_expression(&assignment.value, fmt, 0);
        }
        Statement::ProcedureCall(procedure) => format_call(&procedure.call, fmt),
    }
}

/// Branch or loop body on its own, further indented line
fn format_nested(stmt: &Statement, fmt: &mut Formatter) {
    fmt.write_newline();
    fmt.indent();
    fmt.write_indent();
    format_statement(stmt, fmt);
    fmt.dedent();
}

fn ends_with_open_if(stmt: &Statement) -> bool {
    match stmt {
        Statement::If(if_stmt) => match &if_stmt.else_branch {
            Some(else_branch) => ends_with_open_if(else_branch),
            None => true,
        },
        Statement::While(while_stmt) => ends_with_open_if(&while_stmt.body),
        _ => false,
    }
}

fn wrap_in_compound(stmt: &Statement) -> Statement {
    Statement::compound(vec![stmt.clone()])
}

fn format_expression(expr: &Expression, fmt: &mut Formatter, precedence: u8) {
    match expr {
        Expression::Integer(integer) => fmt.write_str(&integer.value.to_string()),
        Expression::String(string) => {
            fmt.write_str("'");
            fmt.write_str(&string.value);
            fmt.write_str("'");
        }
        Expression::VarRef(var) => fmt.write_str(var.name.as_str()),
        Expression::Call(call) => format_call(call, fmt),
        Expression::BinaryOp(binop) => format_binary_op(binop, fmt, precedence),
    }
}

fn format_call(call: &Call, fmt: &mut Formatter) {
    fmt.write_str(call.name.as_str());
    fmt.write_str("(");
    for (i, arg) in call.arguments.iter().enumerate() {
        if i > 0 {
            fmt.write_str(", ");
        }
        format_expression(arg, fmt, 0);
    }
    fmt.write_str(")");
}

fn format_binary_op(binop: &BinaryOp, fmt: &mut Formatter, parent_prec: u8) {
    let op_prec = binop.op.precedence();
    let needs_parens = op_prec < parent_prec;

    if needs_parens {
        fmt.write_str("(");
    }

    format_expression(&binop.left, fmt, op_prec);
    fmt.write_str(" ");
    fmt.write_str(binop.op.symbol());
    fmt.write_str(" ");
    format_expression(&binop.right, fmt, op_prec + 1);

    if needs_parens {
        fmt.write_str(")");
    }
}
