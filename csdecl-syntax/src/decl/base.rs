use std::fmt;

use crate::{SyntaxList, TypeSyntax, name::write_comma_separated};

/// A plain base-type entry in a base list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseTypeSyntax {
    ty: TypeSyntax,
}

impl BaseTypeSyntax {
    pub fn new(ty: TypeSyntax) -> Self {
        Self { ty }
    }

    pub fn ty(&self) -> &TypeSyntax {
        &self.ty
    }
}

impl fmt::Display for BaseTypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)
    }
}

/// The `: Base, IFoo` clause of a type declaration.
///
/// A present-but-empty base list is a distinct state from an absent one; it
/// prints as nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BaseListSyntax {
    types: SyntaxList<BaseTypeSyntax>,
}

impl BaseListSyntax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn types(&self) -> &SyntaxList<BaseTypeSyntax> {
        &self.types
    }

    pub fn add_types(&self, types: impl IntoIterator<Item = BaseTypeSyntax>) -> Self {
        Self {
            types: self.types.add_range(types),
        }
    }

    /// The clause as printed after the identifier, including the leading ` : `.
    pub(crate) fn suffix(list: Option<&BaseListSyntax>) -> String {
        match list {
            Some(list) if !list.types.is_empty() => format!(" : {}", list),
            _ => String::new(),
        }
    }
}

impl fmt::Display for BaseListSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_comma_separated(f, self.types.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameSyntax;

    #[test]
    fn test_base_list_suffix() {
        let list = BaseListSyntax::new().add_types([
            BaseTypeSyntax::new(NameSyntax::identifier("Entity").into()),
            BaseTypeSyntax::new(NameSyntax::identifier("IDisposable").into()),
        ]);
        assert_eq!(BaseListSyntax::suffix(Some(&list)), " : Entity, IDisposable");
        assert_eq!(BaseListSyntax::suffix(Some(&BaseListSyntax::new())), "");
        assert_eq!(BaseListSyntax::suffix(None), "");
    }
}
