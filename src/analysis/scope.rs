use std::collections::HashMap;
use std::fmt;

use crate::ast::name::Name;

/// A named type. Two types are the same when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    pub name: Name,
}

impl Type {
    pub fn new(name: impl Into<Name>) -> Self {
        Self { name: name.into() }
    }

    pub fn integer() -> Self {
        Type::new("integer")
    }

    /// Stand-in for a declaration whose type could not be resolved
    pub fn unknown() -> Self {
        Type::new("unknown")
    }

    pub fn is_unknown(&self) -> bool {
        *self == Type::unknown()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Type,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: Name,
    pub ty: Type,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn type_name(ty: Type) -> Self {
        Self {
            name: ty.name.clone(),
            ty,
            kind: SymbolKind::Type,
        }
    }

    pub fn variable(name: impl Into<Name>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            kind: SymbolKind::Variable,
        }
    }
}

/// Symbols visible at one nesting level, chained to the enclosing level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    symbols: HashMap<Name, Symbol>,
    parent: Option<Box<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Scope) -> Self {
        Scope {
            symbols: HashMap::new(),
            parent: Some(Box::new(parent)),
        }
    }

    /// Outermost scope: the predefined types
    pub fn builtin() -> Self {
        let mut scope = Scope::new();
        scope.add(Symbol::type_name(Type::integer()));
        scope
    }

    /// Adds `symbol`, replacing a local symbol of the same name
    pub fn add(&mut self, symbol: Symbol) {
        self.symbols.insert(symbol.name.clone(), symbol);
    }

    pub fn find_local(&self, name: &Name) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Innermost symbol called `name`, searching outwards
    pub fn find(&self, name: &Name) -> Option<&Symbol> {
        self.find_local(name)
            .or_else(|| self.parent.as_ref().and_then(|p| p.find(name)))
    }
}
