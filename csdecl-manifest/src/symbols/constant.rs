//! Attribute argument expressions read back as typed constants.

use std::{iter::Peekable, str::Chars};

use csdecl_semantic::{ConstantValue, TypedConstant};
use csdecl_syntax::{ExpressionSyntax, LiteralExpressionSyntax, LiteralKind, PrefixOperator};

/// The constant an argument expression denotes.
///
/// `A.B` reads as member `B` of enum `A`; anything outside the constant
/// grammar is kept as its source text under `object`.
pub(crate) fn constant_from_expression(expression: &ExpressionSyntax) -> TypedConstant {
    match expression {
        ExpressionSyntax::Literal(literal) => constant_from_literal(literal),
        ExpressionSyntax::Parenthesized(inner) => constant_from_expression(inner),
        ExpressionSyntax::Prefix {
            operator: PrefixOperator::Minus,
            operand,
        } => negate(constant_from_expression(operand)).unwrap_or_else(|| opaque(expression)),
        ExpressionSyntax::TypeOf(ty) => TypedConstant::type_of(ty.to_string()),
        ExpressionSyntax::NameOf(inner) => TypedConstant::string(nameof_text(inner)),
        ExpressionSyntax::MemberAccess {
            expression: receiver,
            name,
        } => TypedConstant::enum_member(receiver.to_string(), name.clone()),
        other => opaque(other),
    }
}

/// An integer constant typed the way C# types an unsuffixed literal.
pub(crate) fn integer_constant(value: i64) -> TypedConstant {
    i32::try_from(value).map_or_else(|_| TypedConstant::long(value), TypedConstant::int)
}

fn opaque(expression: &ExpressionSyntax) -> TypedConstant {
    TypedConstant::primitive("object", ConstantValue::String(expression.to_string()))
}

fn negate(constant: TypedConstant) -> Option<TypedConstant> {
    match constant.value {
        ConstantValue::Int(v) => v.checked_neg().map(integer_constant),
        ConstantValue::UInt(v) => 0i64.checked_sub_unsigned(v).map(TypedConstant::long),
        ConstantValue::Float(v) => Some(TypedConstant {
            value: ConstantValue::Float(-v),
            ..constant
        }),
        _ => None,
    }
}

// nameof(A.B.C) is "C"
fn nameof_text(expression: &ExpressionSyntax) -> String {
    match expression {
        ExpressionSyntax::MemberAccess { name, .. } => name.clone(),
        ExpressionSyntax::Name(name) => name.simple_identifier().to_string(),
        other => other.to_string(),
    }
}

fn constant_from_literal(literal: &LiteralExpressionSyntax) -> TypedConstant {
    match literal.kind() {
        LiteralKind::String => TypedConstant::string(string_value(literal.token())),
        LiteralKind::Char => {
            let value = unescape(strip_delimiters(literal.token(), '\''));
            value
                .chars()
                .next()
                .map_or_else(TypedConstant::null, TypedConstant::char)
        }
        LiteralKind::Numeric => numeric_constant(literal.token()),
        LiteralKind::True => TypedConstant::bool(true),
        LiteralKind::False => TypedConstant::bool(false),
        LiteralKind::Null => TypedConstant::null(),
    }
}

fn strip_delimiters(token: &str, delimiter: char) -> &str {
    token
        .strip_prefix(delimiter)
        .and_then(|body| body.strip_suffix(delimiter))
        .unwrap_or(token)
}

fn string_value(token: &str) -> String {
    match token.strip_prefix('@') {
        Some(verbatim) => strip_delimiters(verbatim, '"').replace("\"\"", "\""),
        None => unescape(strip_delimiters(token, '"')),
    }
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let decoded = match chars.next() {
            Some('0') => Some('\0'),
            Some('a') => Some('\u{7}'),
            Some('b') => Some('\u{8}'),
            Some('f') => Some('\u{c}'),
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('t') => Some('\t'),
            Some('v') => Some('\u{b}'),
            Some('u') => hex_char(&mut chars, 4),
            Some('U') => hex_char(&mut chars, 8),
            Some('x') => hex_char(&mut chars, 4),
            Some(other) => Some(other),
            None => Some('\\'),
        };
        out.extend(decoded);
    }
    out
}

fn hex_char(chars: &mut Peekable<Chars<'_>>, max_digits: usize) -> Option<char> {
    let mut value = 0u32;
    for _ in 0..max_digits {
        let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) else {
            break;
        };
        value = value * 16 + digit;
        chars.next();
    }
    char::from_u32(value)
}

fn numeric_constant(token: &str) -> TypedConstant {
    let text: String = token
        .chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();

    let (radix, body) = if let Some(hex) = text.strip_prefix("0x") {
        (16, hex)
    } else if let Some(binary) = text.strip_prefix("0b") {
        (2, binary)
    } else {
        (10, text.as_str())
    };

    let is_real =
        radix == 10 && (body.contains(['.', 'e']) || body.ends_with(['f', 'd', 'm']));
    if is_real {
        let type_name = match body.chars().last() {
            Some('f') => "float",
            Some('m') => "decimal",
            _ => "double",
        };
        return body
            .trim_end_matches(['f', 'd', 'm'])
            .parse::<f64>()
            .map(|v| TypedConstant::primitive(type_name, ConstantValue::Float(v)))
            .unwrap_or_else(|_| unparsed(token));
    }

    let digits = body.trim_end_matches(['u', 'l']);
    let suffix = &body[digits.len()..];
    let Ok(value) = u64::from_str_radix(digits, radix) else {
        return unparsed(token);
    };

    let candidates: &[&str] = match (suffix.contains('u'), suffix.contains('l')) {
        (false, false) => &["int", "uint", "long", "ulong"],
        (true, false) => &["uint", "ulong"],
        (false, true) => &["long", "ulong"],
        (true, true) => &["ulong"],
    };
    let type_name = candidates
        .iter()
        .copied()
        .find(|ty| fits(value, ty))
        .unwrap_or("ulong");

    match i64::try_from(value) {
        Ok(signed) if matches!(type_name, "int" | "long") => {
            TypedConstant::primitive(type_name, ConstantValue::Int(signed))
        }
        _ => TypedConstant::primitive(type_name, ConstantValue::UInt(value)),
    }
}

fn unparsed(token: &str) -> TypedConstant {
    TypedConstant::primitive("object", ConstantValue::String(token.to_string()))
}

fn fits(value: u64, type_name: &str) -> bool {
    match type_name {
        "int" => value <= i32::MAX as u64,
        "uint" => value <= u64::from(u32::MAX),
        "long" => value <= i64::MAX as u64,
        _ => true,
    }
}
