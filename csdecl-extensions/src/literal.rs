use csdecl_syntax::{
    ExpressionSyntax, LiteralExpressionSyntax, PredefinedType, PrefixOperator, Result,
    factory::parse_expression,
};

/// A typed attribute-argument value.
///
/// Converting a `LiteralValue` builds the literal node directly, with string
/// and character escaping handled, so no text is re-parsed. `Raw` is the
/// exception: it holds expression text and goes through the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Expression text such as `LogLevel.Warning` or `typeof(User)`.
    Raw(String),
}

impl LiteralValue {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Build the expression node for this value.
    pub fn to_expression(&self) -> Result<ExpressionSyntax> {
        let expr = match self {
            Self::String(value) => LiteralExpressionSyntax::string(value).into(),
            Self::Char(value) => LiteralExpressionSyntax::char(*value).into(),
            Self::Int(value) if *value < 0 => {
                negate(LiteralExpressionSyntax::numeric(value.unsigned_abs()).into())
            }
            Self::Int(value) => LiteralExpressionSyntax::numeric(value).into(),
            Self::UInt(value) => LiteralExpressionSyntax::numeric(value).into(),
            Self::Float(value) => float_expression(*value),
            Self::Bool(value) => LiteralExpressionSyntax::bool(*value).into(),
            Self::Null => LiteralExpressionSyntax::null().into(),
            Self::Raw(text) => return parse_expression(text),
        };
        Ok(expr)
    }
}

fn negate(operand: ExpressionSyntax) -> ExpressionSyntax {
    ExpressionSyntax::Prefix {
        operator: PrefixOperator::Minus,
        operand: Box::new(operand),
    }
}

/// Finite values print with a fractional part; the rest use `double` constants.
fn float_expression(value: f64) -> ExpressionSyntax {
    let double = || ExpressionSyntax::PredefinedType(PredefinedType::Double);
    if value.is_nan() {
        return ExpressionSyntax::member_access(double(), "NaN");
    }
    if value.is_infinite() {
        let name = if value > 0.0 {
            "PositiveInfinity"
        } else {
            "NegativeInfinity"
        };
        return ExpressionSyntax::member_access(double(), name);
    }

    let literal = LiteralExpressionSyntax::numeric(format!("{:?}", value.abs())).into();
    if value.is_sign_negative() && value != 0.0 {
        negate(literal)
    } else {
        literal
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<i32> for LiteralValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for LiteralValue {
    fn from(value: u32) -> Self {
        Self::UInt(value.into())
    }
}

impl From<u64> for LiteralValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<LiteralValue>> From<Option<T>> for LiteralValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: impl Into<LiteralValue>) -> String {
        value.into().to_expression().unwrap().to_string()
    }

    #[test]
    fn test_string_is_escaped() {
        assert_eq!(text(r#"say "hi" \ bye"#), r#""say \"hi\" \\ bye""#);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(text(42), "42");
        assert_eq!(text(-7i64), "-7");
        assert_eq!(text(i64::MIN), "-9223372036854775808");
        assert_eq!(text(u64::MAX), "18446744073709551615");
        assert_eq!(text(1.0), "1.0");
        assert_eq!(text(-0.5), "-0.5");
        assert_eq!(text(f64::NAN), "double.NaN");
        assert_eq!(text(f64::NEG_INFINITY), "double.NegativeInfinity");
    }

    #[test]
    fn test_keywords_and_chars() {
        assert_eq!(text(true), "true");
        assert_eq!(text(LiteralValue::Null), "null");
        assert_eq!(text(None::<i32>), "null");
        assert_eq!(text('\''), r"'\''");
    }

    #[test]
    fn test_raw_goes_through_parser() {
        assert_eq!(text(LiteralValue::raw("LogLevel.Warning")), "LogLevel.Warning");
        assert!(LiteralValue::raw("not valid!").to_expression().is_err());
    }
}
