//! Declaration nodes.
//!
//! Every node is an immutable value. Fields are private and every `with_*`
//! or `add_*` method returns a new node; list slots are [`SyntaxList`]s, so
//! the copy shares every slot it did not change.

macro_rules! impl_has_modifiers {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::HasModifiers for $ty {
            fn modifiers(&self) -> &$crate::TokenList {
                &self.modifiers
            }

            fn with_modifier_tokens(&self, modifiers: $crate::TokenList) -> Self {
                Self {
                    modifiers,
                    ..self.clone()
                }
            }
        }
    )+};
}

macro_rules! impl_has_attribute_lists {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::HasAttributeLists for $ty {
            fn attribute_lists(&self) -> &$crate::SyntaxList<$crate::AttributeListSyntax> {
                &self.attribute_lists
            }

            fn with_attribute_lists(
                &self,
                attribute_lists: $crate::SyntaxList<$crate::AttributeListSyntax>,
            ) -> Self {
                Self {
                    attribute_lists,
                    ..self.clone()
                }
            }
        }
    )+};
}

macro_rules! impl_display_via_source {
    ($($ty:ty),+ $(,)?) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::render::Renderable::to_source(self))
            }
        }
    )+};
}

mod base;
mod enums;
mod field;
mod member;
mod method;
mod namespace;
mod property;
mod types;

pub use base::{BaseListSyntax, BaseTypeSyntax};
pub use enums::{EnumDeclaration, EnumMemberDeclaration};
pub use field::{FieldDeclaration, VariableDeclarationSyntax, VariableDeclaratorSyntax};
pub use member::{DeclarationKind, MemberDeclaration};
pub use method::{MethodBody, MethodDeclaration, ParameterSyntax};
pub use namespace::{CompilationUnit, NamespaceDeclaration, UsingDirectiveSyntax};
pub use property::{AccessorDeclarationSyntax, AccessorKind, PropertyDeclaration};
pub use types::{ClassDeclaration, InterfaceDeclaration};

use crate::{AttributeListSyntax, SyntaxList, render::CodeFragment};

/// One line per attribute list, printed above the declaration.
pub(crate) fn attribute_fragments(lists: &SyntaxList<AttributeListSyntax>) -> Vec<CodeFragment> {
    lists
        .iter()
        .map(|list| CodeFragment::Line(list.to_string()))
        .collect()
}

/// Members separated by blank lines, except between adjacent fields and properties.
pub(crate) fn member_fragments(members: &[MemberDeclaration]) -> Vec<CodeFragment> {
    let mut fragments = Vec::new();
    for (i, member) in members.iter().enumerate() {
        if i > 0 && !(members[i - 1].is_data_member() && member.is_data_member()) {
            fragments.push(CodeFragment::Blank);
        }
        fragments.extend(crate::render::Renderable::to_fragments(member));
    }
    fragments
}
