//! Method declarations.

use std::fmt;

use super::attribute_fragments;
use crate::{
    AttributeListSyntax, ExpressionSyntax, SyntaxList, TokenList, TypeSyntax,
    kind::modifier_prefix,
    name::write_comma_separated,
    render::{CodeFragment, Renderable},
};

/// `Type name = default`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSyntax {
    ty: TypeSyntax,
    identifier: String,
    default: Option<ExpressionSyntax>,
}

impl ParameterSyntax {
    pub fn new(ty: TypeSyntax, identifier: impl Into<String>) -> Self {
        Self {
            ty,
            identifier: identifier.into(),
            default: None,
        }
    }

    pub fn ty(&self) -> &TypeSyntax {
        &self.ty
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn with_default(&self, default: Option<ExpressionSyntax>) -> Self {
        Self {
            default,
            ..self.clone()
        }
    }
}

impl fmt::Display for ParameterSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.identifier)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// How a method's body is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MethodBody {
    /// No body: `void Run();` (abstract, extern, interface members).
    #[default]
    None,
    /// An empty block body.
    Block,
    /// `=> expression;`
    Expression(ExpressionSyntax),
}

/// `modifiers ReturnType Name(parameters) body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    attribute_lists: SyntaxList<AttributeListSyntax>,
    modifiers: TokenList,
    return_type: TypeSyntax,
    identifier: String,
    parameters: SyntaxList<ParameterSyntax>,
    body: MethodBody,
}

impl MethodDeclaration {
    pub fn new(return_type: TypeSyntax, identifier: impl Into<String>) -> Self {
        Self {
            attribute_lists: SyntaxList::new(),
            modifiers: TokenList::new(),
            return_type,
            identifier: identifier.into(),
            parameters: SyntaxList::new(),
            body: MethodBody::None,
        }
    }

    pub fn return_type(&self) -> &TypeSyntax {
        &self.return_type
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn parameters(&self) -> &SyntaxList<ParameterSyntax> {
        &self.parameters
    }

    pub fn body(&self) -> &MethodBody {
        &self.body
    }

    pub fn add_parameters(&self, parameters: impl IntoIterator<Item = ParameterSyntax>) -> Self {
        Self {
            parameters: self.parameters.add_range(parameters),
            ..self.clone()
        }
    }

    pub fn with_body(&self, body: MethodBody) -> Self {
        Self {
            body,
            ..self.clone()
        }
    }
}

impl_has_modifiers!(MethodDeclaration);
impl_has_attribute_lists!(MethodDeclaration);
impl_display_via_source!(MethodDeclaration);

struct Parameters<'a>(&'a [ParameterSyntax]);

impl fmt::Display for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_comma_separated(f, self.0)
    }
}

impl Renderable for MethodDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = attribute_fragments(&self.attribute_lists);
        let header = format!(
            "{}{} {}({})",
            modifier_prefix(&self.modifiers),
            self.return_type,
            self.identifier,
            Parameters(&self.parameters)
        );
        fragments.push(match &self.body {
            MethodBody::None => CodeFragment::Line(format!("{};", header)),
            MethodBody::Block => CodeFragment::braced(header, Vec::new()),
            MethodBody::Expression(expr) => CodeFragment::Line(format!("{} => {};", header, expr)),
        });
        fragments
    }
}
