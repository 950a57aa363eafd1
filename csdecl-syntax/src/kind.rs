//! Keyword inventories: modifier kinds, modifier tokens and predefined types.

use std::{fmt, str::FromStr};

use crate::SyntaxList;

/// A declaration modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Public,
    Private,
    Protected,
    Internal,
    Static,
    Readonly,
    Const,
    Partial,
    Override,
    Virtual,
    Abstract,
    Sealed,
    New,
    Extern,
    Unsafe,
    Volatile,
    Async,
    Required,
    File,
    Ref,
}

impl ModifierKind {
    /// Every modifier kind, in the order the C# style guide lists them.
    pub const ALL: [ModifierKind; 20] = [
        Self::Public,
        Self::Private,
        Self::Protected,
        Self::Internal,
        Self::File,
        Self::Static,
        Self::Extern,
        Self::New,
        Self::Virtual,
        Self::Abstract,
        Self::Sealed,
        Self::Override,
        Self::Readonly,
        Self::Unsafe,
        Self::Required,
        Self::Volatile,
        Self::Async,
        Self::Const,
        Self::Partial,
        Self::Ref,
    ];

    /// The keyword text of this modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Static => "static",
            Self::Readonly => "readonly",
            Self::Const => "const",
            Self::Partial => "partial",
            Self::Override => "override",
            Self::Virtual => "virtual",
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
            Self::New => "new",
            Self::Extern => "extern",
            Self::Unsafe => "unsafe",
            Self::Volatile => "volatile",
            Self::Async => "async",
            Self::Required => "required",
            Self::File => "file",
            Self::Ref => "ref",
        }
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a word is not a modifier keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a modifier keyword")]
pub struct UnknownModifier(pub String);

impl FromStr for ModifierKind {
    type Err = UnknownModifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownModifier(s.to_string()))
    }
}

/// A modifier token as it appears in a declaration's modifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    kind: ModifierKind,
}

impl SyntaxToken {
    pub fn new(kind: ModifierKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn text(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl From<ModifierKind> for SyntaxToken {
    fn from(kind: ModifierKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Ordered modifier tokens of a declaration.
pub type TokenList = SyntaxList<SyntaxToken>;

/// Render a token list as `public static ` (trailing space when non-empty).
pub(crate) fn modifier_prefix(tokens: &TokenList) -> String {
    tokens.iter().map(|t| format!("{} ", t.text())).collect()
}

/// A C# predefined type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedType {
    Bool,
    Byte,
    SByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Decimal,
    Char,
    String,
    Object,
    Void,
}

impl PredefinedType {
    const ALL: [PredefinedType; 16] = [
        Self::Bool,
        Self::Byte,
        Self::SByte,
        Self::Short,
        Self::UShort,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::ULong,
        Self::Float,
        Self::Double,
        Self::Decimal,
        Self::Char,
        Self::String,
        Self::Object,
        Self::Void,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::String => "string",
            Self::Object => "object",
            Self::Void => "void",
        }
    }

    /// Look a predefined type up by its keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == word)
    }
}

impl fmt::Display for PredefinedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// C# reserved keywords that cannot be used as plain identifiers.
/// Source: https://learn.microsoft.com/dotnet/csharp/language-reference/keywords/
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a word is a C# reserved keyword.
pub fn is_reserved_keyword(word: &str) -> bool {
    RESERVED_KEYWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_round_trips_through_text() {
        for kind in ModifierKind::ALL {
            assert_eq!(kind.as_str().parse::<ModifierKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_modifier() {
        let err = "publik".parse::<ModifierKind>().unwrap_err();
        assert_eq!(err.to_string(), "'publik' is not a modifier keyword");
    }

    #[test]
    fn test_modifier_prefix() {
        let tokens: TokenList = vec![
            SyntaxToken::new(ModifierKind::Public),
            SyntaxToken::new(ModifierKind::Static),
        ]
        .into();
        assert_eq!(modifier_prefix(&tokens), "public static ");
        assert_eq!(modifier_prefix(&TokenList::new()), "");
    }

    #[test]
    fn test_predefined_from_keyword() {
        assert_eq!(PredefinedType::from_keyword("int"), Some(PredefinedType::Int));
        assert_eq!(PredefinedType::from_keyword("Int32"), None);
    }

    #[test]
    fn test_reserved_keywords() {
        assert!(is_reserved_keyword("class"));
        assert!(is_reserved_keyword("int"));
        // Contextual keywords remain usable as identifiers
        assert!(!is_reserved_keyword("var"));
        assert!(!is_reserved_keyword("nameof"));
    }
}
