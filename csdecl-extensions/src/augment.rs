//! Base lists, using-directives and attributes.

use csdecl_syntax::{
    AttributeSyntax, HasAttributeLists, HasBaseList, HasUsings, Result,
    factory::{self, parse_name, parse_type_name},
};

/// Base-list assembly for classes and interfaces.
pub trait BaseListExt: HasBaseList {
    /// Parse each name as a simple base type and install a fresh base list
    /// holding exactly those types in order.
    ///
    /// The previous base list is replaced, not extended. An empty `names`
    /// installs an empty base list, which differs from having none.
    fn with_base_list<I>(&self, names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let types = names
            .into_iter()
            .map(|name| parse_type_name(name.as_ref()).map(factory::simple_base_type))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_base_types(Some(factory::base_list(types))))
    }
}

impl<T: HasBaseList> BaseListExt for T {}

/// Using-directive assembly for namespaces and compilation units.
pub trait UsingsExt: HasUsings {
    /// Parse each name and append one `using` per name after the existing ones.
    fn add_usings<I>(&self, names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let usings = names
            .into_iter()
            .map(|name| parse_name(name.as_ref()).map(factory::using_directive))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.add_using_directives(usings))
    }
}

impl<T: HasUsings> UsingsExt for T {}

/// Attribute attachment for anything that carries attribute lists.
pub trait AttributeExt: HasAttributeLists {
    /// Append `attribute` in a new attribute list of its own.
    fn add_attribute(&self, attribute: AttributeSyntax) -> Self {
        self.add_attribute_lists([factory::attribute_list(attribute)])
    }
}

impl<T: HasAttributeLists> AttributeExt for T {}

#[cfg(test)]
mod tests {
    use csdecl_syntax::{
        ClassDeclaration, CompilationUnit, EnumMemberDeclaration, NamespaceDeclaration,
        ParseError, PropertyDeclaration, TypeSyntax,
    };

    use super::*;

    fn base_names(class: &ClassDeclaration) -> Vec<String> {
        class
            .base_list()
            .map(|list| list.types().iter().map(|t| t.to_string()).collect())
            .unwrap_or_default()
    }

    fn using_names<T: HasUsings>(node: &T) -> Vec<String> {
        node.usings().iter().map(|u| u.name().to_string()).collect()
    }

    #[test]
    fn test_with_base_list_on_fresh_class() {
        let class = ClassDeclaration::new("Resource")
            .with_base_list(["IDisposable", "IComparable"])
            .unwrap();
        assert_eq!(base_names(&class), ["IDisposable", "IComparable"]);
    }

    #[test]
    fn test_with_base_list_replaces() {
        let class = ClassDeclaration::new("Resource")
            .with_base_list(["Entity", "IDisposable"])
            .unwrap()
            .with_base_list(["IComparable<Resource>"])
            .unwrap();
        assert_eq!(base_names(&class), ["IComparable<Resource>"]);
    }

    #[test]
    fn test_with_base_list_empty_is_present() {
        let class = ClassDeclaration::new("Resource")
            .with_base_list(["Entity"])
            .unwrap()
            .with_base_list(Vec::<String>::new())
            .unwrap();
        let list = class.base_list().expect("base list should be present");
        assert!(list.types().is_empty());
    }

    #[test]
    fn test_with_base_list_propagates_parse_error() {
        let err = ClassDeclaration::new("Resource")
            .with_base_list(["IDisposable", "List<"])
            .unwrap_err();
        assert!(matches!(err, ParseError::Expected { .. }));
    }

    #[test]
    fn test_add_usings_appends_in_order() {
        let ns = NamespaceDeclaration::new(parse_name("Acme").unwrap())
            .add_usings(["System"])
            .unwrap();
        let ns = ns.add_usings(["System.IO", "System.Linq"]).unwrap();
        let ns = ns.add_usings(["Acme.Core"]).unwrap();
        assert_eq!(
            using_names(&ns),
            ["System", "System.IO", "System.Linq", "Acme.Core"]
        );
    }

    #[test]
    fn test_add_usings_on_compilation_unit() {
        let unit = CompilationUnit::new()
            .add_usings(["System", "global::System.Text"])
            .unwrap();
        assert_eq!(using_names(&unit), ["System", "global::System.Text"]);
    }

    #[test]
    fn test_add_usings_rejects_keyword() {
        let ns = NamespaceDeclaration::new(parse_name("Acme").unwrap());
        let err = ns.add_usings(["System", "namespace"]).unwrap_err();
        assert!(matches!(err, ParseError::ReservedKeyword { .. }));
    }

    #[test]
    fn test_add_attribute_appends_lists() {
        let serializable = AttributeSyntax::new(parse_name("Serializable").unwrap());
        let obsolete = AttributeSyntax::new(parse_name("Obsolete").unwrap());

        let property = PropertyDeclaration::new(TypeSyntax::named(parse_name("Guid").unwrap()), "Id")
            .add_attribute(serializable)
            .add_attribute(obsolete);

        let lists: Vec<String> = property
            .attribute_lists()
            .iter()
            .map(|list| list.to_string())
            .collect();
        assert_eq!(lists, ["[Serializable]", "[Obsolete]"]);
        assert!(property.attribute_lists().iter().all(|l| l.attributes().len() == 1));
    }

    #[test]
    fn test_add_attribute_on_enum_member() {
        let member = EnumMemberDeclaration::new("Legacy")
            .add_attribute(AttributeSyntax::new(parse_name("Obsolete").unwrap()));
        assert_eq!(member.to_string(), "[Obsolete]\nLegacy\n");
    }
}
