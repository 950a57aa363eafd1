//! Field declarations.

use std::fmt;

use super::attribute_fragments;
use crate::{
    AttributeListSyntax, ExpressionSyntax, SyntaxList, TokenList, TypeSyntax,
    kind::modifier_prefix,
    name::write_comma_separated,
    render::{CodeFragment, Renderable},
};

/// One declared variable: `name` or `name = initializer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaratorSyntax {
    identifier: String,
    initializer: Option<ExpressionSyntax>,
}

impl VariableDeclaratorSyntax {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            initializer: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn initializer(&self) -> Option<&ExpressionSyntax> {
        self.initializer.as_ref()
    }

    pub fn with_initializer(&self, initializer: Option<ExpressionSyntax>) -> Self {
        Self {
            identifier: self.identifier.clone(),
            initializer,
        }
    }
}

impl fmt::Display for VariableDeclaratorSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.initializer {
            Some(init) => write!(f, "{} = {}", self.identifier, init),
            None => f.write_str(&self.identifier),
        }
    }
}

/// `Type a, b = 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarationSyntax {
    ty: TypeSyntax,
    variables: SyntaxList<VariableDeclaratorSyntax>,
}

impl VariableDeclarationSyntax {
    pub fn new(ty: TypeSyntax) -> Self {
        Self {
            ty,
            variables: SyntaxList::new(),
        }
    }

    pub fn ty(&self) -> &TypeSyntax {
        &self.ty
    }

    pub fn variables(&self) -> &SyntaxList<VariableDeclaratorSyntax> {
        &self.variables
    }

    pub fn with_variables(&self, variables: SyntaxList<VariableDeclaratorSyntax>) -> Self {
        Self {
            ty: self.ty.clone(),
            variables,
        }
    }
}

impl fmt::Display for VariableDeclarationSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.ty)?;
        write_comma_separated(f, self.variables.as_slice())
    }
}

/// `modifiers Type a, b;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    attribute_lists: SyntaxList<AttributeListSyntax>,
    modifiers: TokenList,
    declaration: VariableDeclarationSyntax,
}

impl FieldDeclaration {
    pub fn new(declaration: VariableDeclarationSyntax) -> Self {
        Self {
            attribute_lists: SyntaxList::new(),
            modifiers: TokenList::new(),
            declaration,
        }
    }

    pub fn declaration(&self) -> &VariableDeclarationSyntax {
        &self.declaration
    }

    pub fn with_declaration(&self, declaration: VariableDeclarationSyntax) -> Self {
        Self {
            declaration,
            ..self.clone()
        }
    }
}

impl_has_modifiers!(FieldDeclaration);
impl_has_attribute_lists!(FieldDeclaration);
impl_display_via_source!(FieldDeclaration);

impl Renderable for FieldDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = attribute_fragments(&self.attribute_lists);
        fragments.push(CodeFragment::Line(format!(
            "{}{};",
            modifier_prefix(&self.modifiers),
            self.declaration
        )));
        fragments
    }
}
