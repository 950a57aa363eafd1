//! Capability traits shared by declaration nodes.
//!
//! Each trait names one slot a declaration may carry. Builders written
//! against a capability work for every node type that has the slot, and a
//! node type that lacks the slot simply does not implement the trait.

use crate::{AttributeListSyntax, BaseListSyntax, SyntaxList, TokenList, UsingDirectiveSyntax};

/// Declarations that carry a modifier list.
pub trait HasModifiers: Sized {
    fn modifiers(&self) -> &TokenList;

    /// Return a copy whose modifier list is exactly `modifiers`.
    fn with_modifier_tokens(&self, modifiers: TokenList) -> Self;
}

/// Declarations that carry attribute lists.
pub trait HasAttributeLists: Sized {
    fn attribute_lists(&self) -> &SyntaxList<AttributeListSyntax>;

    fn with_attribute_lists(&self, attribute_lists: SyntaxList<AttributeListSyntax>) -> Self;

    /// Append attribute lists after the existing ones.
    fn add_attribute_lists(&self, lists: impl IntoIterator<Item = AttributeListSyntax>) -> Self {
        self.with_attribute_lists(self.attribute_lists().add_range(lists))
    }
}

/// Type declarations that may list base types.
pub trait HasBaseList: Sized {
    fn base_list(&self) -> Option<&BaseListSyntax>;

    fn with_base_types(&self, base_list: Option<BaseListSyntax>) -> Self;
}

/// Containers of using-directives.
pub trait HasUsings: Sized {
    fn usings(&self) -> &SyntaxList<UsingDirectiveSyntax>;

    fn with_using_directives(&self, usings: SyntaxList<UsingDirectiveSyntax>) -> Self;

    /// Append using-directives after the existing ones.
    fn add_using_directives(
        &self,
        usings: impl IntoIterator<Item = UsingDirectiveSyntax>,
    ) -> Self {
        self.with_using_directives(self.usings().add_range(usings))
    }
}
