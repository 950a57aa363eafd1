//! String-based shells ready for augmentation.

use csdecl_syntax::{
    AttributeSyntax, FieldDeclaration, NameSyntax, NamespaceDeclaration, ParseError, Position,
    Result, TypeSyntax, VariableDeclarationSyntax, VariableDeclaratorSyntax,
    factory::parse_name,
};

/// `namespace <name> { }` with `name` parsed as a qualified name.
pub fn namespace_declaration(name: &str) -> Result<NamespaceDeclaration> {
    Ok(NamespaceDeclaration::new(parse_name(name)?))
}

/// An attribute with no argument list.
pub fn attribute(name: &str) -> Result<AttributeSyntax> {
    Ok(AttributeSyntax::new(parse_name(name)?))
}

/// A single-variable field `ty name;` with no modifiers.
pub fn field_declaration(ty: TypeSyntax, name: &str) -> Result<FieldDeclaration> {
    let variable = VariableDeclaratorSyntax::new(simple_identifier(name)?);
    let declaration = VariableDeclarationSyntax::new(ty).with_variables(vec![variable].into());
    Ok(FieldDeclaration::new(declaration))
}

fn simple_identifier(name: &str) -> Result<String> {
    match parse_name(name)? {
        NameSyntax::Identifier(identifier) => Ok(identifier),
        other => Err(ParseError::Expected {
            expected: "a simple identifier".to_string(),
            found: format!("'{}'", other),
            pos: Position::new(0, 1, 1),
        }),
    }
}

#[cfg(test)]
mod tests {
    use csdecl_syntax::{PredefinedType, factory::parse_type_name};

    use super::*;

    #[test]
    fn test_namespace_declaration() {
        let ns = namespace_declaration("Acme.Models").unwrap();
        assert_eq!(ns.name().to_string(), "Acme.Models");
        assert!(namespace_declaration("Acme.").is_err());
    }

    #[test]
    fn test_attribute() {
        let attr = attribute("System.Obsolete").unwrap();
        assert_eq!(attr.to_string(), "System.Obsolete");
        assert!(attr.argument_list().is_none());
    }

    #[test]
    fn test_field_declaration() {
        let field =
            field_declaration(TypeSyntax::predefined(PredefinedType::Int), "_count").unwrap();
        assert_eq!(field.to_string(), "int _count;\n");

        let generic = field_declaration(parse_type_name("List<string>").unwrap(), "_names");
        assert_eq!(generic.unwrap().to_string(), "List<string> _names;\n");
    }

    #[test]
    fn test_field_declaration_rejects_bad_names() {
        let int = TypeSyntax::predefined(PredefinedType::Int);
        assert!(matches!(
            field_declaration(int.clone(), "a.b"),
            Err(ParseError::Expected { .. })
        ));
        assert!(matches!(
            field_declaration(int, "static"),
            Err(ParseError::ReservedKeyword { .. })
        ));
    }
}
