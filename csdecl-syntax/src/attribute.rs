//! Attribute nodes: `[Target: Name(arg, name = value), Other]`.

use std::fmt;

use crate::{ExpressionSyntax, NameSyntax, SyntaxList, name::write_comma_separated};

/// One argument inside an attribute's parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeArgumentSyntax {
    name_equals: Option<String>,
    expression: ExpressionSyntax,
}

impl AttributeArgumentSyntax {
    /// A positional argument, or whatever `expression` already spells out.
    pub fn new(expression: ExpressionSyntax) -> Self {
        Self {
            name_equals: None,
            expression,
        }
    }

    /// A named argument `name = expression`.
    pub fn named(name: impl Into<String>, expression: ExpressionSyntax) -> Self {
        Self {
            name_equals: Some(name.into()),
            expression,
        }
    }

    pub fn name_equals(&self) -> Option<&str> {
        self.name_equals.as_deref()
    }

    pub fn expression(&self) -> &ExpressionSyntax {
        &self.expression
    }

    /// The argument's name, whether given as `name_equals` or as an assignment expression.
    pub fn argument_name(&self) -> Option<String> {
        if let Some(name) = &self.name_equals {
            return Some(name.clone());
        }
        match &self.expression {
            ExpressionSyntax::Assignment { left, .. } => Some(left.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeArgumentSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name_equals {
            Some(name) => write!(f, "{} = {}", name, self.expression),
            None => write!(f, "{}", self.expression),
        }
    }
}

/// The parenthesized argument list of an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeArgumentListSyntax {
    arguments: SyntaxList<AttributeArgumentSyntax>,
}

impl AttributeArgumentListSyntax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arguments(&self) -> &SyntaxList<AttributeArgumentSyntax> {
        &self.arguments
    }

    pub fn add_arguments(
        &self,
        arguments: impl IntoIterator<Item = AttributeArgumentSyntax>,
    ) -> Self {
        Self {
            arguments: self.arguments.add_range(arguments),
        }
    }
}

impl fmt::Display for AttributeArgumentListSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_comma_separated(f, self.arguments.as_slice())?;
        f.write_str(")")
    }
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSyntax {
    name: NameSyntax,
    argument_list: Option<AttributeArgumentListSyntax>,
}

impl AttributeSyntax {
    pub fn new(name: NameSyntax) -> Self {
        Self {
            name,
            argument_list: None,
        }
    }

    pub fn name(&self) -> &NameSyntax {
        &self.name
    }

    pub fn argument_list(&self) -> Option<&AttributeArgumentListSyntax> {
        self.argument_list.as_ref()
    }

    /// The arguments in order; empty when there is no argument list.
    pub fn arguments(&self) -> &[AttributeArgumentSyntax] {
        self.argument_list
            .as_ref()
            .map(|list| list.arguments().as_slice())
            .unwrap_or(&[])
    }

    pub fn with_name(&self, name: NameSyntax) -> Self {
        Self {
            name,
            argument_list: self.argument_list.clone(),
        }
    }

    pub fn with_argument_list(&self, argument_list: Option<AttributeArgumentListSyntax>) -> Self {
        Self {
            name: self.name.clone(),
            argument_list,
        }
    }

    /// Append arguments, creating the argument list if the attribute has none.
    pub fn add_argument_list_arguments(
        &self,
        arguments: impl IntoIterator<Item = AttributeArgumentSyntax>,
    ) -> Self {
        let list = self.argument_list.clone().unwrap_or_default();
        self.with_argument_list(Some(list.add_arguments(arguments)))
    }
}

impl fmt::Display for AttributeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(list) = &self.argument_list {
            write!(f, "{}", list)?;
        }
        Ok(())
    }
}

/// Explicit target of an attribute list, e.g. `[return: NotNull]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeTarget {
    Assembly,
    Module,
    Field,
    Event,
    Method,
    Param,
    Property,
    Return,
    Type,
}

impl AttributeTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assembly => "assembly",
            Self::Module => "module",
            Self::Field => "field",
            Self::Event => "event",
            Self::Method => "method",
            Self::Param => "param",
            Self::Property => "property",
            Self::Return => "return",
            Self::Type => "type",
        }
    }
}

/// A bracketed attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeListSyntax {
    target: Option<AttributeTarget>,
    attributes: SyntaxList<AttributeSyntax>,
}

impl AttributeListSyntax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<AttributeTarget> {
        self.target
    }

    pub fn attributes(&self) -> &SyntaxList<AttributeSyntax> {
        &self.attributes
    }

    pub fn with_target(&self, target: Option<AttributeTarget>) -> Self {
        Self {
            target,
            attributes: self.attributes.clone(),
        }
    }

    pub fn add_attributes(&self, attributes: impl IntoIterator<Item = AttributeSyntax>) -> Self {
        Self {
            target: self.target,
            attributes: self.attributes.add_range(attributes),
        }
    }
}

impl fmt::Display for AttributeListSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if let Some(target) = self.target {
            write!(f, "{}: ", target.as_str())?;
        }
        write_comma_separated(f, self.attributes.as_slice())?;
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LiteralExpressionSyntax;

    fn obsolete() -> AttributeSyntax {
        AttributeSyntax::new(NameSyntax::identifier("Obsolete"))
    }

    #[test]
    fn test_attribute_without_arguments() {
        assert_eq!(obsolete().to_string(), "Obsolete");
        assert!(obsolete().arguments().is_empty());
    }

    #[test]
    fn test_empty_argument_list_prints_parens() {
        let attr = obsolete().with_argument_list(Some(AttributeArgumentListSyntax::new()));
        assert_eq!(attr.to_string(), "Obsolete()");
    }

    #[test]
    fn test_add_argument_list_arguments_appends() {
        let first = obsolete().add_argument_list_arguments([AttributeArgumentSyntax::new(
            LiteralExpressionSyntax::string("old").into(),
        )]);
        let second = first.add_argument_list_arguments([AttributeArgumentSyntax::named(
            "DiagnosticId",
            LiteralExpressionSyntax::string("CS1").into(),
        )]);

        assert_eq!(first.arguments().len(), 1);
        assert_eq!(second.to_string(), r#"Obsolete("old", DiagnosticId = "CS1")"#);
    }

    #[test]
    fn test_argument_name() {
        let named = AttributeArgumentSyntax::named("Order", LiteralExpressionSyntax::numeric(1).into());
        assert_eq!(named.argument_name().as_deref(), Some("Order"));

        let assigned = AttributeArgumentSyntax::new(ExpressionSyntax::assignment(
            ExpressionSyntax::identifier("Order"),
            LiteralExpressionSyntax::numeric(1).into(),
        ));
        assert_eq!(assigned.argument_name().as_deref(), Some("Order"));

        let positional = AttributeArgumentSyntax::new(LiteralExpressionSyntax::numeric(1).into());
        assert_eq!(positional.argument_name(), None);
    }

    #[test]
    fn test_attribute_list_with_target() {
        let list = AttributeListSyntax::new()
            .with_target(Some(AttributeTarget::Assembly))
            .add_attributes([
                AttributeSyntax::new(NameSyntax::identifier("InternalsVisibleTo")),
                obsolete(),
            ]);
        assert_eq!(list.to_string(), "[assembly: InternalsVisibleTo, Obsolete]");
    }
}
