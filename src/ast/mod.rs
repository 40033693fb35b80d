//! # Abstract Syntax Tree
//!
//! The tree produced by [`crate::parser::parse`]. All nodes are created once
//! during parsing and never mutated afterwards; consumers that need to attach
//! information (inferred types, resolved symbols) keep it in side tables keyed
//! by node identity instead.
//!
//! ## Shape
//!
//! ```text
//! Unit
//!  ├── declarations: [Declaration]      var x: integer;
//!  └── main: Statement                  begin ... end
//!
//! Statement  = Compound | If | While | Assignment | ProcedureCall
//! Expression = Integer | String | VarRef | BinaryOp | Call
//! ```
//!
//! ## Locations and equality
//!
//! Every node except [`Unit`] carries the [`Location`] of its leading token
//! (binary operations are located at their operator). Locations only serve
//! diagnostics: two trees compare equal when their structure, names (ignoring
//! case) and literal values match, wherever they came from in the source.
//!
//! ## Traversal
//!
//! The [`visitor`] module defines the hook protocol used by every consumer of
//! the tree.

pub mod expression;
pub mod name;
pub mod statement;
pub mod visitor;

pub use crate::parser::Location;

use expression::Expression;
use name::Name;
use statement::Statement;

/// The parse root: declarations followed by the main compound statement
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub declarations: Vec<Declaration>,
    pub main: Statement,
}

impl Unit {
    pub fn new(declarations: Vec<Declaration>, main: Statement) -> Self {
        Self { declarations, main }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Var(VarDeclaration),
}

impl Declaration {
    pub fn location(&self) -> Location {
        match self {
            Declaration::Var(var) => var.location,
        }
    }
}

/// `name: type_name;`
#[derive(Debug, Clone)]
pub struct VarDeclaration {
    pub name: Name,
    pub type_name: Name,
    pub location: Location,
}

impl VarDeclaration {
    pub fn new(name: impl Into<Name>, type_name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            location: Location::default(),
        }
    }
}

impl PartialEq for VarDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.type_name == other.type_name
    }
}

impl From<VarDeclaration> for Declaration {
    fn from(var: VarDeclaration) -> Self {
        Declaration::Var(var)
    }
}

// Helpers for building trees by hand, mostly used to state expected parses.
// Nodes built this way sit at `Location::default()`.

impl Expression {
    pub fn integer(value: i32) -> Self {
        Expression::Integer(expression::IntegerLiteral {
            value,
            location: Location::default(),
        })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(expression::StringLiteral {
            value: value.into(),
            location: Location::default(),
        })
    }

    pub fn var(name: impl Into<Name>) -> Self {
        Expression::VarRef(expression::VarRef {
            name: name.into(),
            location: Location::default(),
        })
    }

    pub fn binary(op: expression::BinOpKind, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp(expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: Location::default(),
        })
    }

    pub fn call(name: impl Into<Name>, arguments: Vec<Expression>) -> Self {
        Expression::Call(expression::Call::new(name, arguments))
    }
}

impl Statement {
    pub fn compound(statements: Vec<Statement>) -> Self {
        Statement::Compound(statement::Compound {
            statements,
            location: Location::default(),
        })
    }

    pub fn if_then(condition: Expression, then_branch: Statement, else_branch: Option<Statement>) -> Self {
        Statement::If(statement::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
            location: Location::default(),
        })
    }

    pub fn while_do(condition: Expression, body: Statement) -> Self {
        Statement::While(statement::While {
            condition,
            body: Box::new(body),
            location: Location::default(),
        })
    }

    pub fn assign(name: impl Into<Name>, value: Expression) -> Self {
        Statement::Assignment(statement::Assignment {
            name: name.into(),
            value,
            location: Location::default(),
        })
    }

    pub fn procedure(name: impl Into<Name>, arguments: Vec<Expression>) -> Self {
        Statement::ProcedureCall(statement::ProcedureCall {
            call: expression::Call::new(name, arguments),
        })
    }
}
