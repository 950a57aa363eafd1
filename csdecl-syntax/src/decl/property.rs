//! Auto-property declarations.

use std::fmt;

use super::attribute_fragments;
use crate::{
    AttributeListSyntax, ExpressionSyntax, ModifierKind, SyntaxList, SyntaxToken, TokenList,
    TypeSyntax,
    kind::modifier_prefix,
    render::{CodeFragment, Renderable},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

impl AccessorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Init => "init",
        }
    }
}

/// `get;`, `private set;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDeclarationSyntax {
    kind: AccessorKind,
    modifiers: TokenList,
}

impl AccessorDeclarationSyntax {
    pub fn new(kind: AccessorKind) -> Self {
        Self {
            kind,
            modifiers: TokenList::new(),
        }
    }

    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    pub fn with_modifier(&self, modifier: ModifierKind) -> Self {
        Self {
            kind: self.kind,
            modifiers: self.modifiers.add(SyntaxToken::new(modifier)),
        }
    }
}

impl fmt::Display for AccessorDeclarationSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{};", modifier_prefix(&self.modifiers), self.kind.as_str())
    }
}

/// `modifiers Type Name { get; set; } = initializer;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    attribute_lists: SyntaxList<AttributeListSyntax>,
    modifiers: TokenList,
    ty: TypeSyntax,
    identifier: String,
    accessors: SyntaxList<AccessorDeclarationSyntax>,
    initializer: Option<ExpressionSyntax>,
}

impl PropertyDeclaration {
    /// A read-write auto-property (`{ get; set; }`).
    pub fn new(ty: TypeSyntax, identifier: impl Into<String>) -> Self {
        Self {
            attribute_lists: SyntaxList::new(),
            modifiers: TokenList::new(),
            ty,
            identifier: identifier.into(),
            accessors: vec![
                AccessorDeclarationSyntax::new(AccessorKind::Get),
                AccessorDeclarationSyntax::new(AccessorKind::Set),
            ]
            .into(),
            initializer: None,
        }
    }

    pub fn ty(&self) -> &TypeSyntax {
        &self.ty
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn accessors(&self) -> &SyntaxList<AccessorDeclarationSyntax> {
        &self.accessors
    }

    pub fn initializer(&self) -> Option<&ExpressionSyntax> {
        self.initializer.as_ref()
    }

    pub fn with_accessors(&self, accessors: SyntaxList<AccessorDeclarationSyntax>) -> Self {
        Self {
            accessors,
            ..self.clone()
        }
    }

    pub fn with_initializer(&self, initializer: Option<ExpressionSyntax>) -> Self {
        Self {
            initializer,
            ..self.clone()
        }
    }
}

impl_has_modifiers!(PropertyDeclaration);
impl_has_attribute_lists!(PropertyDeclaration);
impl_display_via_source!(PropertyDeclaration);

impl Renderable for PropertyDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = attribute_fragments(&self.attribute_lists);
        let accessors: Vec<String> = self.accessors.iter().map(|a| a.to_string()).collect();
        let initializer = self
            .initializer
            .as_ref()
            .map(|init| format!(" = {};", init))
            .unwrap_or_default();
        fragments.push(CodeFragment::Line(format!(
            "{}{} {} {{ {} }}{}",
            modifier_prefix(&self.modifiers),
            self.ty,
            self.identifier,
            accessors.join(" "),
            initializer
        )));
        fragments
    }
}
