use super::Location;
use super::expression::{Call, Expression};
use super::name::Name;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Compound(Compound),
    If(If),
    While(While),
    Assignment(Assignment),
    ProcedureCall(ProcedureCall),
}

impl Statement {
    pub fn location(&self) -> Location {
        match self {
            Statement::Compound(c) => c.location,
            Statement::If(i) => i.location,
            Statement::While(w) => w.location,
            Statement::Assignment(a) => a.location,
            Statement::ProcedureCall(p) => p.call.location,
        }
    }
}

/// `begin statement; ... end`
#[derive(Debug, Clone)]
pub struct Compound {
    pub statements: Vec<Statement>,
    pub location: Location,
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.statements == other.statements
    }
}

#[derive(Debug, Clone)]
pub struct If {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub location: Location,
}

impl PartialEq for If {
    fn eq(&self, other: &Self) -> bool {
        self.condition == other.condition
            && self.then_branch == other.then_branch
            && self.else_branch == other.else_branch
    }
}

#[derive(Debug, Clone)]
pub struct While {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub location: Location,
}

impl PartialEq for While {
    fn eq(&self, other: &Self) -> bool {
        self.condition == other.condition && self.body == other.body
    }
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub name: Name,
    pub value: Expression,
    pub location: Location,
}

impl PartialEq for Assignment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value
    }
}

/// A call in statement position. Unlike a call expression the parentheses
/// are optional: `WriteLn;` calls `WriteLn` with no arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    pub call: Call,
}
