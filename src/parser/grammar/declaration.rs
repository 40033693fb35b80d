//! The `var` section

use crate::ast::{Declaration, VarDeclaration};
use crate::lexer::{identifier, keyword, operator};
use crate::parser::combinators::{BoxedParser, one_or_more};

/// var_entry := identifier ":" identifier ";"
///
/// Once `name :` has been read the rest of the entry is mandatory.
pub fn var_declaration() -> BoxedParser<Declaration> {
    let type_name = identifier().or_error("expected type name");
    let end = operator(";").or_error("expected ';'");
    ((identifier() - operator(":")) + (type_name - end))
        >> |(name, type_name)| {
            Declaration::Var(VarDeclaration {
                name: name.text.into(),
                type_name: type_name.text.into(),
                location: name.location,
            })
        }
}

/// var_section := "var" var_entry+
pub fn var_section() -> BoxedParser<Vec<Declaration>> {
    keyword("var") * one_or_more(var_declaration())
}
