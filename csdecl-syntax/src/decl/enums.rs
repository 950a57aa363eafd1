//! Enum and enum member declarations.

use super::attribute_fragments;
use crate::{
    AttributeListSyntax, ExpressionSyntax, SyntaxList, TokenList, TypeSyntax,
    kind::modifier_prefix,
    render::{CodeFragment, Renderable},
};

/// A single enum member: `Name` or `Name = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMemberDeclaration {
    attribute_lists: SyntaxList<AttributeListSyntax>,
    identifier: String,
    equals_value: Option<ExpressionSyntax>,
}

impl EnumMemberDeclaration {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            attribute_lists: SyntaxList::new(),
            identifier: identifier.into(),
            equals_value: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn equals_value(&self) -> Option<&ExpressionSyntax> {
        self.equals_value.as_ref()
    }

    pub fn with_equals_value(&self, value: Option<ExpressionSyntax>) -> Self {
        Self {
            equals_value: value,
            ..self.clone()
        }
    }

    fn declaration_text(&self) -> String {
        match &self.equals_value {
            Some(value) => format!("{} = {}", self.identifier, value),
            None => self.identifier.clone(),
        }
    }
}

impl Renderable for EnumMemberDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = attribute_fragments(&self.attribute_lists);
        fragments.push(CodeFragment::Line(self.declaration_text()));
        fragments
    }
}

/// `enum Name : underlying { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    attribute_lists: SyntaxList<AttributeListSyntax>,
    modifiers: TokenList,
    identifier: String,
    underlying_type: Option<TypeSyntax>,
    members: SyntaxList<EnumMemberDeclaration>,
}

impl EnumDeclaration {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            attribute_lists: SyntaxList::new(),
            modifiers: TokenList::new(),
            identifier: identifier.into(),
            underlying_type: None,
            members: SyntaxList::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn underlying_type(&self) -> Option<&TypeSyntax> {
        self.underlying_type.as_ref()
    }

    pub fn members(&self) -> &SyntaxList<EnumMemberDeclaration> {
        &self.members
    }

    pub fn with_underlying_type(&self, ty: Option<TypeSyntax>) -> Self {
        Self {
            underlying_type: ty,
            ..self.clone()
        }
    }

    pub fn add_members(&self, members: impl IntoIterator<Item = EnumMemberDeclaration>) -> Self {
        Self {
            members: self.members.add_range(members),
            ..self.clone()
        }
    }
}

impl_has_modifiers!(EnumDeclaration);
impl_has_attribute_lists!(EnumDeclaration, EnumMemberDeclaration);
impl_display_via_source!(EnumDeclaration, EnumMemberDeclaration);

impl Renderable for EnumDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = attribute_fragments(&self.attribute_lists);
        let underlying = self
            .underlying_type
            .as_ref()
            .map(|ty| format!(" : {}", ty))
            .unwrap_or_default();
        let header = format!(
            "{}enum {}{}",
            modifier_prefix(&self.modifiers),
            self.identifier,
            underlying
        );

        let last = self.members.len().saturating_sub(1);
        let body = self
            .members
            .iter()
            .enumerate()
            .flat_map(|(i, member)| {
                let mut member_fragments = attribute_fragments(&member.attribute_lists);
                let comma = if i < last { "," } else { "" };
                member_fragments.push(CodeFragment::Line(format!(
                    "{}{}",
                    member.declaration_text(),
                    comma
                )));
                member_fragments
            })
            .collect();

        fragments.push(CodeFragment::braced(header, body));
        fragments
    }
}
