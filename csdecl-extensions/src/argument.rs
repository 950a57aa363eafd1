//! Attribute-argument synthesis.
//!
//! Two routes build an argument. The text route formats a value with its
//! `Display` form, optionally quoted and prefixed with `name = `, and parses
//! the result as an expression; it only works when that text is valid C#.
//! The typed route ([`LiteralValue`]) constructs the literal node directly.

use std::fmt;

use csdecl_syntax::{
    AttributeArgumentSyntax, AttributeSyntax, NameSyntax, ParseError, Position, Result,
    factory::{parse_expression, parse_name},
};

use crate::LiteralValue;

/// Quoting policy of the text route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArgumentFormat {
    /// The value's text as is: `5`, `LogLevel.Warning`.
    #[default]
    Unquoted,
    /// The value's text in double quotes, without escaping.
    Quoted,
}

impl ArgumentFormat {
    /// Apply the policy to a value, prefixing `name = ` when a name is given.
    pub fn apply(&self, name: Option<&str>, value: &dyn fmt::Display) -> String {
        let value = match self {
            Self::Unquoted => value.to_string(),
            Self::Quoted => format!("\"{}\"", value),
        };
        match name {
            Some(name) => format!("{} = {}", name, value),
            None => value,
        }
    }
}

/// The expression text the text route parses for a named argument.
///
/// An absent value always gives `name = null`, whatever the format.
pub fn format_argument_text<V: fmt::Display>(
    name: &str,
    value: Option<&V>,
    format: ArgumentFormat,
) -> String {
    match value {
        Some(value) => format.apply(Some(name), value),
        None => format!("{} = null", name),
    }
}

/// Argument builders for [`AttributeSyntax`].
///
/// Every method returns a new attribute with one argument appended, creating
/// the argument list when the attribute has none. Text that does not parse is
/// reported as the parser's [`ParseError`].
pub trait AttributeArgumentExt: Sized {
    /// Positional, unquoted: `Attr(5)`.
    fn add_argument(&self, value: impl fmt::Display) -> Result<Self>;

    /// Named, unquoted: `Attr(x = 5)`.
    fn add_named_argument(&self, name: &str, value: impl fmt::Display) -> Result<Self>;

    /// Positional, quoted: `Attr("hi")`.
    fn add_quoted_argument(&self, value: impl fmt::Display) -> Result<Self>;

    /// Named, quoted: `Attr(x = "hi")`.
    fn add_named_quoted_argument(&self, name: &str, value: impl fmt::Display) -> Result<Self>;

    /// Named argument under `format`; `None` gives `name = null`.
    fn add_formatted_argument<V: fmt::Display>(
        &self,
        name: &str,
        value: Option<V>,
        format: ArgumentFormat,
    ) -> Result<Self>;

    /// `Attr(name = null)`.
    fn add_null_argument(&self, name: &str) -> Result<Self> {
        self.add_formatted_argument::<&str>(name, None, ArgumentFormat::Unquoted)
    }

    /// Typed argument, positional when `name` is `None`.
    fn add_literal_argument(&self, name: Option<&str>, value: LiteralValue) -> Result<Self>;
}

impl AttributeArgumentExt for AttributeSyntax {
    fn add_argument(&self, value: impl fmt::Display) -> Result<Self> {
        add_text_argument(self, &ArgumentFormat::Unquoted.apply(None, &value))
    }

    fn add_named_argument(&self, name: &str, value: impl fmt::Display) -> Result<Self> {
        self.add_formatted_argument(name, Some(value), ArgumentFormat::Unquoted)
    }

    fn add_quoted_argument(&self, value: impl fmt::Display) -> Result<Self> {
        add_text_argument(self, &ArgumentFormat::Quoted.apply(None, &value))
    }

    fn add_named_quoted_argument(&self, name: &str, value: impl fmt::Display) -> Result<Self> {
        self.add_formatted_argument(name, Some(value), ArgumentFormat::Quoted)
    }

    fn add_formatted_argument<V: fmt::Display>(
        &self,
        name: &str,
        value: Option<V>,
        format: ArgumentFormat,
    ) -> Result<Self> {
        add_text_argument(self, &format_argument_text(name, value.as_ref(), format))
    }

    fn add_literal_argument(&self, name: Option<&str>, value: LiteralValue) -> Result<Self> {
        let expression = value.to_expression()?;
        let argument = match name {
            Some(name) => AttributeArgumentSyntax::named(argument_name(name)?, expression),
            None => AttributeArgumentSyntax::new(expression),
        };
        Ok(self.add_argument_list_arguments([argument]))
    }
}

fn add_text_argument(attribute: &AttributeSyntax, text: &str) -> Result<AttributeSyntax> {
    let expression = parse_expression(text)?;
    Ok(attribute.add_argument_list_arguments([AttributeArgumentSyntax::new(expression)]))
}

/// Check that `name` is a single identifier usable before `=`.
fn argument_name(name: &str) -> Result<String> {
    match parse_name(name)? {
        NameSyntax::Identifier(identifier) => Ok(identifier),
        other => Err(ParseError::Expected {
            expected: "an argument name".to_string(),
            found: format!("'{}'", other),
            pos: Position::new(0, 1, 1),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obsolete() -> AttributeSyntax {
        AttributeSyntax::new(parse_name("Obsolete").unwrap())
    }

    #[test]
    fn test_format_argument_text() {
        assert_eq!(
            format_argument_text("x", Some(&5), ArgumentFormat::Unquoted),
            "x = 5"
        );
        assert_eq!(
            format_argument_text("x", Some(&"hi"), ArgumentFormat::Quoted),
            "x = \"hi\""
        );
    }

    #[test]
    fn test_null_is_named_under_every_format() {
        for format in [ArgumentFormat::Unquoted, ArgumentFormat::Quoted] {
            assert_eq!(format_argument_text::<i32>("x", None, format), "x = null");
        }
    }

    #[test]
    fn test_add_named_argument() {
        let attr = obsolete().add_named_argument("x", 5).unwrap();
        assert_eq!(attr.arguments().len(), 1);
        assert_eq!(attr.arguments()[0].to_string(), "x = 5");
        assert_eq!(attr.arguments()[0].argument_name().as_deref(), Some("x"));
    }

    #[test]
    fn test_add_named_quoted_argument() {
        let attr = obsolete().add_named_quoted_argument("x", "hi").unwrap();
        assert_eq!(attr.to_string(), r#"Obsolete(x = "hi")"#);
    }

    #[test]
    fn test_positional_arguments() {
        let attr = obsolete()
            .add_quoted_argument("use Create")
            .unwrap()
            .add_argument(true)
            .unwrap();
        assert_eq!(attr.to_string(), r#"Obsolete("use Create", true)"#);
    }

    #[test]
    fn test_add_null_argument() {
        let attr = obsolete().add_null_argument("message").unwrap();
        assert_eq!(attr.to_string(), "Obsolete(message = null)");

        let quoted = obsolete()
            .add_formatted_argument::<&str>("message", None, ArgumentFormat::Quoted)
            .unwrap();
        assert_eq!(quoted.to_string(), "Obsolete(message = null)");
    }

    #[test]
    fn test_arguments_append_in_order() {
        let attr = obsolete()
            .add_quoted_argument("old")
            .unwrap()
            .add_named_argument("error", false)
            .unwrap()
            .add_named_quoted_argument("DiagnosticId", "CS0001")
            .unwrap();
        assert_eq!(
            attr.to_string(),
            r#"Obsolete("old", error = false, DiagnosticId = "CS0001")"#
        );
    }

    #[test]
    fn test_malformed_text_propagates_parse_error() {
        let err = obsolete().add_argument("two words").unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { .. }));

        let err = obsolete()
            .add_named_quoted_argument("message", "say \"hi\"")
            .unwrap_err();
        assert!(matches!(err, ParseError::TrailingInput { .. }));
    }

    #[test]
    fn test_malformed_numeric_text_is_rejected() {
        for text in ["1e", "5uuu", "0x", "0b12", "1.5u", "1ffm"] {
            let attr = AttributeSyntax::new(parse_name("Range").unwrap());
            assert!(attr.add_argument(text).is_err(), "{}", text);
        }
        let attr = AttributeSyntax::new(parse_name("Range").unwrap())
            .add_argument("0x1F")
            .unwrap()
            .add_argument("10UL")
            .unwrap();
        assert_eq!(attr.to_string(), "Range(0x1F, 10UL)");
    }

    #[test]
    fn test_literal_argument_escapes_without_reparse() {
        let attr = obsolete()
            .add_literal_argument(Some("message"), LiteralValue::from("say \"hi\""))
            .unwrap();
        let argument = &attr.arguments()[0];
        assert_eq!(argument.name_equals(), Some("message"));
        assert_eq!(attr.to_string(), r#"Obsolete(message = "say \"hi\"")"#);
    }

    #[test]
    fn test_literal_argument_positional_null() {
        let attr = obsolete()
            .add_literal_argument(None, LiteralValue::Null)
            .unwrap();
        assert_eq!(attr.to_string(), "Obsolete(null)");
    }

    #[test]
    fn test_literal_argument_rejects_qualified_name() {
        let err = obsolete()
            .add_literal_argument(Some("a.b"), LiteralValue::Int(1))
            .unwrap_err();
        assert!(matches!(err, ParseError::Expected { .. }));
    }

    #[test]
    fn test_receiver_is_untouched() {
        let original = obsolete();
        let _ = original.add_argument(1).unwrap();
        assert!(original.argument_list().is_none());
    }
}
