//! Visitor protocol for consumers of the tree (analysis, emitters).
//!
//! A consumer implements [`Visitor`] and overrides only the hooks it needs.
//! Composite nodes get an entry hook returning whether to descend into their
//! children (default `true`); leaves get a callback with no return value
//! (default no-op). Binary operations are reported after both operands have
//! been traversed, one callback per operator.
//!
//! Traversal starts from [`Unit::accept`] (or `accept` on any sub-node).

use super::expression::{BinOpKind, BinaryOp, Call, Expression, IntegerLiteral, StringLiteral, VarRef};
use super::statement::{Assignment, Compound, If, ProcedureCall, Statement, While};
use super::{Declaration, Unit, VarDeclaration};

pub trait Visitor {
    fn visit_unit(&mut self, _unit: &Unit) -> bool {
        true
    }

    fn visit_var_declaration(&mut self, _var: &VarDeclaration) {}

    fn visit_compound(&mut self, _compound: &Compound) -> bool {
        true
    }

    fn visit_if(&mut self, _if: &If) -> bool {
        true
    }

    fn visit_while(&mut self, _while: &While) -> bool {
        true
    }

    fn visit_assignment(&mut self, _assignment: &Assignment) -> bool {
        true
    }

    fn visit_procedure_call(&mut self, _procedure: &ProcedureCall) -> bool {
        true
    }

    fn visit_call(&mut self, _call: &Call) -> bool {
        true
    }

    fn visit_integer(&mut self, _integer: &IntegerLiteral) {}

    fn visit_string(&mut self, _string: &StringLiteral) {}

    fn visit_var_ref(&mut self, _var: &VarRef) {}

    fn visit_add(&mut self, _add: &BinaryOp) {}

    fn visit_sub(&mut self, _sub: &BinaryOp) {}

    fn visit_mul(&mut self, _mul: &BinaryOp) {}

    fn visit_div(&mut self, _div: &BinaryOp) {}

    fn visit_mod(&mut self, _mod: &BinaryOp) {}

    fn visit_eq(&mut self, _eq: &BinaryOp) {}

    fn visit_ne(&mut self, _ne: &BinaryOp) {}

    fn visit_lt(&mut self, _lt: &BinaryOp) {}

    fn visit_gt(&mut self, _gt: &BinaryOp) {}

    fn visit_le(&mut self, _le: &BinaryOp) {}

    fn visit_ge(&mut self, _ge: &BinaryOp) {}
}

impl Unit {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if visitor.visit_unit(self) {
            for decl in &self.declarations {
                decl.accept(visitor);
            }
            self.main.accept(visitor);
        }
    }
}

impl Declaration {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Declaration::Var(var) => visitor.visit_var_declaration(var),
        }
    }
}

impl Statement {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Statement::Compound(compound) => {
                if visitor.visit_compound(compound) {
                    for stmt in &compound.statements {
                        stmt.accept(visitor);
                    }
                }
            }
            Statement::If(if_stmt) => {
                if visitor.visit_if(if_stmt) {
                    if_stmt.condition.accept(visitor);
                    if_stmt.then_branch.accept(visitor);
                    if let Some(else_branch) = &if_stmt.else_branch {
                        else_branch.accept(visitor);
                    }
                }
            }
            Statement::While(while_stmt) => {
                if visitor.visit_while(while_stmt) {
                    while_stmt.condition.accept(visitor);
                    while_stmt.body.accept(visitor);
                }
            }
            Statement::Assignment(assignment) => {
                if visitor.visit_assignment(assignment) {
                    assignment.value.accept(visitor);
                }
            }
            Statement::ProcedureCall(procedure) => {
                if visitor.visit_procedure_call(procedure) {
                    procedure.call.accept(visitor);
                }
            }
        }
    }
}

impl Call {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        if visitor.visit_call(self) {
            for arg in &self.arguments {
                arg.accept(visitor);
            }
        }
    }
}

impl Expression {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Expression::Integer(integer) => visitor.visit_integer(integer),
            Expression::String(string) => visitor.visit_string(string),
            Expression::VarRef(var) => visitor.visit_var_ref(var),
            Expression::Call(call) => call.accept(visitor),
            Expression::BinaryOp(binary) => {
                binary.left.accept(visitor);
                binary.right.accept(visitor);
                match binary.op {
                    BinOpKind::Add => visitor.visit_add(binary),
                    BinOpKind::Sub => visitor.visit_sub(binary),
                    BinOpKind::Mul => visitor.visit_mul(binary),
                    BinOpKind::Div => visitor.visit_div(binary),
                    BinOpKind::Mod => visitor.visit_mod(binary),
                    BinOpKind::Eq => visitor.visit_eq(binary),
                    BinOpKind::NotEq => visitor.visit_ne(binary),
                    BinOpKind::Lt => visitor.visit_lt(binary),
                    BinOpKind::Gt => visitor.visit_gt(binary),
                    BinOpKind::LtEq => visitor.visit_le(binary),
                    BinOpKind::GtEq => visitor.visit_ge(binary),
                }
            }
        }
    }
}
