//! Expressions usable as attribute arguments, initializers and enum values.

use std::fmt;

use crate::{NameSyntax, PredefinedType, TypeSyntax};

/// Kind of a literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Char,
    Numeric,
    True,
    False,
    Null,
}

/// A literal expression, kept as its source token text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralExpressionSyntax {
    kind: LiteralKind,
    token: String,
}

impl LiteralExpressionSyntax {
    /// Build a literal from already-valid token text.
    pub(crate) fn from_token(kind: LiteralKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }

    /// A regular string literal; quotes, backslashes and control characters are escaped.
    pub fn string(value: &str) -> Self {
        Self::from_token(LiteralKind::String, quote_string(value))
    }

    /// A character literal.
    pub fn char(value: char) -> Self {
        let body = match value {
            '\'' => "\\'".to_string(),
            '"' => "\"".to_string(),
            other => escape_char(other),
        };
        Self::from_token(LiteralKind::Char, format!("'{}'", body))
    }

    /// A numeric literal from integer or float text.
    pub fn numeric(value: impl fmt::Display) -> Self {
        Self::from_token(LiteralKind::Numeric, value.to_string())
    }

    pub fn bool(value: bool) -> Self {
        if value {
            Self::from_token(LiteralKind::True, "true")
        } else {
            Self::from_token(LiteralKind::False, "false")
        }
    }

    pub fn null() -> Self {
        Self::from_token(LiteralKind::Null, "null")
    }

    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// The literal exactly as it appears in source.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for LiteralExpressionSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// Prefix operators accepted in front of a primary expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    Minus,
    Plus,
    Not,
    Complement,
}

impl PrefixOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Not => "!",
            Self::Complement => "~",
        }
    }
}

/// The restricted expression grammar understood by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionSyntax {
    Literal(LiteralExpressionSyntax),
    /// A simple or alias-qualified name, e.g. `Foo` or `global::System`.
    Name(NameSyntax),
    /// A predefined type used as an expression receiver, e.g. the `int` in `int.MaxValue`.
    PredefinedType(PredefinedType),
    /// `expression.name`
    MemberAccess {
        expression: Box<ExpressionSyntax>,
        name: String,
    },
    Prefix {
        operator: PrefixOperator,
        operand: Box<ExpressionSyntax>,
    },
    Parenthesized(Box<ExpressionSyntax>),
    TypeOf(TypeSyntax),
    NameOf(Box<ExpressionSyntax>),
    /// `left = right`
    Assignment {
        left: Box<ExpressionSyntax>,
        right: Box<ExpressionSyntax>,
    },
}

impl ExpressionSyntax {
    pub fn literal(literal: LiteralExpressionSyntax) -> Self {
        Self::Literal(literal)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Name(NameSyntax::identifier(name))
    }

    pub fn member_access(expression: ExpressionSyntax, name: impl Into<String>) -> Self {
        Self::MemberAccess {
            expression: Box::new(expression),
            name: name.into(),
        }
    }

    pub fn assignment(left: ExpressionSyntax, right: ExpressionSyntax) -> Self {
        Self::Assignment {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The literal, if this expression is one.
    pub fn as_literal(&self) -> Option<&LiteralExpressionSyntax> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl From<LiteralExpressionSyntax> for ExpressionSyntax {
    fn from(literal: LiteralExpressionSyntax) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for ExpressionSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{}", literal),
            Self::Name(name) => write!(f, "{}", name),
            Self::PredefinedType(ty) => write!(f, "{}", ty),
            Self::MemberAccess { expression, name } => write!(f, "{}.{}", expression, name),
            Self::Prefix { operator, operand } => {
                let operand = operand.to_string();
                let operator = operator.as_str();
                // `- -1` must not print as the `--` decrement token
                if matches!(operator, "-" | "+") && operand.starts_with(operator) {
                    write!(f, "{} {}", operator, operand)
                } else {
                    write!(f, "{}{}", operator, operand)
                }
            }
            Self::Parenthesized(inner) => write!(f, "({})", inner),
            Self::TypeOf(ty) => write!(f, "typeof({})", ty),
            Self::NameOf(inner) => write!(f, "nameof({})", inner),
            Self::Assignment { left, right } => write!(f, "{} = {}", left, right),
        }
    }
}

/// Quote `value` as a regular C# string literal.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\'' => out.push('\''),
            other => out.push_str(&escape_char(other)),
        }
    }
    out.push('"');
    out
}

fn escape_char(ch: char) -> String {
    match ch {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\0' => "\\0".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\u{2028}' | '\u{2029}' => format!("\\u{:04x}", ch as u32),
        c if c.is_control() => format!("\\u{:04x}", c as u32),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_escaping() {
        let literal = LiteralExpressionSyntax::string("say \"hi\"\\n");
        assert_eq!(literal.token(), r#""say \"hi\"\\n""#);
        assert_eq!(literal.kind(), LiteralKind::String);
    }

    #[test]
    fn test_string_literal_control_chars() {
        assert_eq!(quote_string("a\tb\n"), r#""a\tb\n""#);
        assert_eq!(quote_string("it's"), r#""it's""#);
        assert_eq!(quote_string("\u{1}"), r#""\u0001""#);
    }

    #[test]
    fn test_char_literal() {
        assert_eq!(LiteralExpressionSyntax::char('a').token(), "'a'");
        assert_eq!(LiteralExpressionSyntax::char('\'').token(), r"'\''");
        assert_eq!(LiteralExpressionSyntax::char('"').token(), "'\"'");
        assert_eq!(LiteralExpressionSyntax::char('\n').token(), r"'\n'");
    }

    #[test]
    fn test_keyword_literals() {
        assert_eq!(LiteralExpressionSyntax::bool(true).kind(), LiteralKind::True);
        assert_eq!(LiteralExpressionSyntax::bool(false).token(), "false");
        assert_eq!(LiteralExpressionSyntax::null().token(), "null");
    }

    #[test]
    fn test_expression_display() {
        let expr = ExpressionSyntax::assignment(
            ExpressionSyntax::identifier("Level"),
            ExpressionSyntax::member_access(ExpressionSyntax::identifier("LogLevel"), "Warning"),
        );
        assert_eq!(expr.to_string(), "Level = LogLevel.Warning");

        let negative = ExpressionSyntax::Prefix {
            operator: PrefixOperator::Minus,
            operand: Box::new(LiteralExpressionSyntax::numeric(1).into()),
        };
        assert_eq!(negative.to_string(), "-1");
    }

    #[test]
    fn test_nested_sign_keeps_tokens_apart() {
        let minus = |operand: ExpressionSyntax| ExpressionSyntax::Prefix {
            operator: PrefixOperator::Minus,
            operand: Box::new(operand),
        };
        let nested = minus(minus(LiteralExpressionSyntax::numeric(1).into()));
        assert_eq!(nested.to_string(), "- -1");

        let literal = minus(LiteralExpressionSyntax::numeric(-1).into());
        assert_eq!(literal.to_string(), "- -1");

        let mixed = ExpressionSyntax::Prefix {
            operator: PrefixOperator::Plus,
            operand: Box::new(minus(LiteralExpressionSyntax::numeric(1).into())),
        };
        assert_eq!(mixed.to_string(), "+-1");
    }

    #[test]
    fn test_string_literal_line_separators() {
        let literal = LiteralExpressionSyntax::string("a\u{2028}b\u{2029}c");
        assert_eq!(literal.token(), r#""a\u2028b\u2029c""#);
    }

    #[test]
    fn test_typeof_display() {
        let expr = ExpressionSyntax::TypeOf(TypeSyntax::predefined(PredefinedType::String));
        assert_eq!(expr.to_string(), "typeof(string)");
    }
}
