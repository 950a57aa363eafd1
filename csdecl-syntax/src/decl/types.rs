//! Class and interface declarations.

use super::{BaseListSyntax, MemberDeclaration, attribute_fragments, member_fragments};
use crate::{
    AttributeListSyntax, HasBaseList, SyntaxList, TokenList,
    kind::modifier_prefix,
    render::{CodeFragment, Renderable},
};

/// `class Name : Bases { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    attribute_lists: SyntaxList<AttributeListSyntax>,
    modifiers: TokenList,
    identifier: String,
    base_list: Option<BaseListSyntax>,
    members: SyntaxList<MemberDeclaration>,
}

impl ClassDeclaration {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            attribute_lists: SyntaxList::new(),
            modifiers: TokenList::new(),
            identifier: identifier.into(),
            base_list: None,
            members: SyntaxList::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn members(&self) -> &SyntaxList<MemberDeclaration> {
        &self.members
    }

    pub fn with_identifier(&self, identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..self.clone()
        }
    }

    pub fn with_members(&self, members: SyntaxList<MemberDeclaration>) -> Self {
        Self {
            members,
            ..self.clone()
        }
    }

    pub fn add_members(&self, members: impl IntoIterator<Item = MemberDeclaration>) -> Self {
        self.with_members(self.members.add_range(members))
    }
}

impl_has_modifiers!(ClassDeclaration, InterfaceDeclaration);
impl_has_attribute_lists!(ClassDeclaration, InterfaceDeclaration);
impl_display_via_source!(ClassDeclaration, InterfaceDeclaration);

impl HasBaseList for ClassDeclaration {
    fn base_list(&self) -> Option<&BaseListSyntax> {
        self.base_list.as_ref()
    }

    fn with_base_types(&self, base_list: Option<BaseListSyntax>) -> Self {
        Self {
            base_list,
            ..self.clone()
        }
    }
}

impl Renderable for ClassDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        type_fragments(
            "class",
            &self.attribute_lists,
            &self.modifiers,
            &self.identifier,
            self.base_list.as_ref(),
            &self.members,
        )
    }
}

/// `interface IName : Bases { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    attribute_lists: SyntaxList<AttributeListSyntax>,
    modifiers: TokenList,
    identifier: String,
    base_list: Option<BaseListSyntax>,
    members: SyntaxList<MemberDeclaration>,
}

impl InterfaceDeclaration {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            attribute_lists: SyntaxList::new(),
            modifiers: TokenList::new(),
            identifier: identifier.into(),
            base_list: None,
            members: SyntaxList::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn members(&self) -> &SyntaxList<MemberDeclaration> {
        &self.members
    }

    pub fn add_members(&self, members: impl IntoIterator<Item = MemberDeclaration>) -> Self {
        Self {
            members: self.members.add_range(members),
            ..self.clone()
        }
    }
}

impl HasBaseList for InterfaceDeclaration {
    fn base_list(&self) -> Option<&BaseListSyntax> {
        self.base_list.as_ref()
    }

    fn with_base_types(&self, base_list: Option<BaseListSyntax>) -> Self {
        Self {
            base_list,
            ..self.clone()
        }
    }
}

impl Renderable for InterfaceDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        type_fragments(
            "interface",
            &self.attribute_lists,
            &self.modifiers,
            &self.identifier,
            self.base_list.as_ref(),
            &self.members,
        )
    }
}

fn type_fragments(
    keyword: &str,
    attribute_lists: &SyntaxList<AttributeListSyntax>,
    modifiers: &TokenList,
    identifier: &str,
    base_list: Option<&BaseListSyntax>,
    members: &[MemberDeclaration],
) -> Vec<CodeFragment> {
    let mut fragments = attribute_fragments(attribute_lists);
    let header = format!(
        "{}{} {}{}",
        modifier_prefix(modifiers),
        keyword,
        identifier,
        BaseListSyntax::suffix(base_list)
    );
    fragments.push(CodeFragment::braced(header, member_fragments(members)));
    fragments
}
