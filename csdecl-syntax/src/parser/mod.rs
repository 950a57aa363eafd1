//! Parser for the fragment grammar: names, type names and simple expressions.
//!
//! Full C# source is out of reach on purpose. Each entry point consumes the
//! whole input and fails on anything it does not understand.

mod grammar;
mod lexer;

use grammar::Parser;

use crate::{ExpressionSyntax, NameSyntax, TypeSyntax, error::Result};

/// Parse a possibly qualified, possibly generic name such as
/// `System.Collections.Generic` or `global::Acme.Repository<User>`.
pub fn parse_name(input: &str) -> Result<NameSyntax> {
    let mut parser = Parser::for_input(input)?;
    let name = parser.parse_name()?;
    parser.finish("name")?;
    Ok(name)
}

/// Parse a type reference: a predefined keyword or a name, followed by
/// optional array ranks and nullable markers (`int[]`, `Guid?`).
pub fn parse_type_name(input: &str) -> Result<TypeSyntax> {
    let mut parser = Parser::for_input(input)?;
    let ty = parser.parse_type()?;
    parser.finish("type name")?;
    Ok(ty)
}

/// Parse an expression: a literal, a name, a member access, `typeof`,
/// `nameof`, a prefix operator or a simple `name = value` assignment.
pub fn parse_expression(input: &str) -> Result<ExpressionSyntax> {
    let mut parser = Parser::for_input(input)?;
    let expr = parser.parse_expression()?;
    parser.finish("expression")?;
    Ok(expr)
}
