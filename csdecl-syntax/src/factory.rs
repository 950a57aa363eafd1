//! Free-standing constructors for the small nodes the builders assemble.

use crate::{
    AttributeListSyntax, AttributeSyntax, BaseListSyntax, BaseTypeSyntax, ModifierKind,
    NameSyntax, SyntaxToken, TokenList, TypeSyntax, UsingDirectiveSyntax,
};

pub use crate::parser::{parse_expression, parse_name, parse_type_name};

pub fn token(kind: ModifierKind) -> SyntaxToken {
    SyntaxToken::new(kind)
}

/// A token list holding `kinds` in order, duplicates included.
pub fn token_list(kinds: impl IntoIterator<Item = ModifierKind>) -> TokenList {
    kinds.into_iter().map(token).collect()
}

pub fn identifier_name(identifier: impl Into<String>) -> NameSyntax {
    NameSyntax::identifier(identifier)
}

pub fn simple_base_type(ty: TypeSyntax) -> BaseTypeSyntax {
    BaseTypeSyntax::new(ty)
}

pub fn base_list(types: impl IntoIterator<Item = BaseTypeSyntax>) -> BaseListSyntax {
    BaseListSyntax::new().add_types(types)
}

pub fn using_directive(name: NameSyntax) -> UsingDirectiveSyntax {
    UsingDirectiveSyntax::new(name)
}

/// An untargeted list holding exactly `attribute`.
pub fn attribute_list(attribute: AttributeSyntax) -> AttributeListSyntax {
    AttributeListSyntax::new().add_attributes([attribute])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_list_keeps_order_and_duplicates() {
        let list = token_list([ModifierKind::Public, ModifierKind::Static, ModifierKind::Public]);
        let texts: Vec<&str> = list.iter().map(|t| t.text()).collect();
        assert_eq!(texts, ["public", "static", "public"]);
    }

    #[test]
    fn test_attribute_list_has_one_attribute() {
        let list = attribute_list(AttributeSyntax::new(identifier_name("Serializable")));
        assert_eq!(list.attributes().len(), 1);
        assert_eq!(list.target(), None);
        assert_eq!(list.to_string(), "[Serializable]");
    }

    #[test]
    fn test_base_list_display() {
        let list = base_list([
            simple_base_type(identifier_name("Base").into()),
            simple_base_type(identifier_name("IDisposable").into()),
        ]);
        assert_eq!(list.to_string(), "Base, IDisposable");
    }
}
