use super::Location;
use super::name::Name;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer(IntegerLiteral),
    String(StringLiteral),
    VarRef(VarRef),
    BinaryOp(BinaryOp),
    Call(Call),
}

impl Expression {
    pub fn location(&self) -> Location {
        match self {
            Expression::Integer(i) => i.location,
            Expression::String(s) => s.location,
            Expression::VarRef(v) => v.location,
            Expression::BinaryOp(b) => b.location,
            Expression::Call(c) => c.location,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub value: i32,
    pub location: Location,
}

impl PartialEq for IntegerLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub value: String,
    pub location: Location,
}

impl PartialEq for StringLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[derive(Debug, Clone)]
pub struct VarRef {
    pub name: Name,
    pub location: Location,
}

impl PartialEq for VarRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl BinOpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "div",
            BinOpKind::Mod => "mod",
            BinOpKind::Eq => "=",
            BinOpKind::NotEq => "<>",
            BinOpKind::Lt => "<",
            BinOpKind::Gt => ">",
            BinOpKind::LtEq => "<=",
            BinOpKind::GtEq => ">=",
        }
    }

    /// Binding strength, higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            BinOpKind::Mul | BinOpKind::Div | BinOpKind::Mod => 4,
            BinOpKind::Add | BinOpKind::Sub => 3,
            BinOpKind::Lt | BinOpKind::Gt | BinOpKind::LtEq | BinOpKind::GtEq => 2,
            BinOpKind::Eq | BinOpKind::NotEq => 1,
        }
    }
}

/// Binary operation expression, located at its operator
#[derive(Debug, Clone)]
pub struct BinaryOp {
    pub op: BinOpKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub location: Location,
}

impl PartialEq for BinaryOp {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.left == other.left && self.right == other.right
    }
}

/// `name(arguments)`
#[derive(Debug, Clone)]
pub struct Call {
    pub name: Name,
    pub arguments: Vec<Expression>,
    pub location: Location,
}

impl Call {
    pub fn new(name: impl Into<Name>, arguments: Vec<Expression>) -> Self {
        Self {
            name: name.into(),
            arguments,
            location: Location::default(),
        }
    }
}

impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arguments == other.arguments
    }
}
