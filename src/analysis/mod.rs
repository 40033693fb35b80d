//! Declaration checking.
//!
//! [`type_check`] walks a parsed [`Unit`] with a [`Visitor`] and resolves the
//! type of every `var` entry against the predefined types. Problems are
//! collected as [`Diagnostic`]s rather than aborting. Resolved types are kept
//! in a side table on [`Analysis`], so the tree itself stays untouched.

mod scope;

pub use scope::{Scope, Symbol, SymbolKind, Type};

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::ast::visitor::Visitor;
use crate::ast::{Location, Unit, VarDeclaration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub is_error: bool,
    pub message: String,
    pub location: Location,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, location: Location) -> Self {
        Self {
            is_error: true,
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location.line, self.message)
    }
}

/// Result of [`type_check`]. Borrows the unit it was computed from, since
/// declarations are looked up by address.
#[derive(Debug)]
pub struct Analysis<'u> {
    pub diagnostics: Vec<Diagnostic>,
    declared_types: HashMap<*const VarDeclaration, Type>,
    unit: PhantomData<&'u Unit>,
}

impl<'u> Analysis<'u> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error)
    }

    /// Type resolved for `var`, which must be a node of the analysed unit.
    /// Declarations that failed to check resolve to [`Type::unknown`].
    pub fn declared_type(&self, var: &VarDeclaration) -> Option<&Type> {
        self.declared_types.get(&(var as *const VarDeclaration))
    }
}

struct DeclarationChecker {
    scope: Scope,
    diagnostics: Vec<Diagnostic>,
    declared_types: HashMap<*const VarDeclaration, Type>,
}

impl DeclarationChecker {
    fn resolve(&mut self, var: &VarDeclaration) -> Type {
        if self.scope.find(&var.name).is_some() {
            self.diagnostics.push(Diagnostic::error(
                format!("Variable `{}` redeclared.", var.name),
                var.location,
            ));
            return Type::unknown();
        }

        let ty = match self.scope.find(&var.type_name) {
            Some(symbol) if symbol.kind == SymbolKind::Type => symbol.ty.clone(),
            _ => {
                self.diagnostics.push(Diagnostic::error(
                    format!("Unknown type `{}`.", var.type_name),
                    var.location,
                ));
                return Type::unknown();
            }
        };

        self.scope.add(Symbol::variable(var.name.clone(), ty.clone()));
        ty
    }
}

impl Visitor for DeclarationChecker {
    fn visit_var_declaration(&mut self, var: &VarDeclaration) {
        let ty = self.resolve(var);
        self.declared_types.insert(var as *const VarDeclaration, ty);
    }
}

/// Check the `var` section of `unit`
pub fn type_check(unit: &Unit) -> Analysis<'_> {
    debug!("checking {} declaration(s)", unit.declarations.len());

    let mut checker = DeclarationChecker {
        scope: Scope::with_parent(Scope::builtin()),
        diagnostics: Vec::new(),
        declared_types: HashMap::new(),
    };
    unit.accept(&mut checker);

    debug!("declaration check found {} problem(s)", checker.diagnostics.len());
    Analysis {
        diagnostics: checker.diagnostics,
        declared_types: checker.declared_types,
        unit: PhantomData,
    }
}
