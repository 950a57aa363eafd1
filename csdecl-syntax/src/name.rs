//! Names and type references.

use std::fmt;

use crate::PredefinedType;

/// A (possibly qualified, possibly generic) name such as `System.Collections.Generic.List<int>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameSyntax {
    /// `Foo`
    Identifier(String),
    /// `Foo<T, U>`
    Generic {
        identifier: String,
        type_arguments: Vec<TypeSyntax>,
    },
    /// `Left.Right`, where `right` is an identifier or generic name.
    Qualified {
        left: Box<NameSyntax>,
        right: Box<NameSyntax>,
    },
    /// `alias::Name`, e.g. `global::System`.
    AliasQualified { alias: String, name: Box<NameSyntax> },
}

impl NameSyntax {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn generic(identifier: impl Into<String>, type_arguments: Vec<TypeSyntax>) -> Self {
        Self::Generic {
            identifier: identifier.into(),
            type_arguments,
        }
    }

    pub fn qualified(left: NameSyntax, right: NameSyntax) -> Self {
        Self::Qualified {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The rightmost simple identifier (`List` for `System.Collections.Generic.List<int>`).
    pub fn simple_identifier(&self) -> &str {
        match self {
            Self::Identifier(name) => name,
            Self::Generic { identifier, .. } => identifier,
            Self::Qualified { right, .. } => right.simple_identifier(),
            Self::AliasQualified { name, .. } => name.simple_identifier(),
        }
    }
}

impl fmt::Display for NameSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::Generic {
                identifier,
                type_arguments,
            } => {
                write!(f, "{}<", identifier)?;
                write_comma_separated(f, type_arguments.as_slice())?;
                f.write_str(">")
            }
            Self::Qualified { left, right } => write!(f, "{}.{}", left, right),
            Self::AliasQualified { alias, name } => write!(f, "{}::{}", alias, name),
        }
    }
}

/// A type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSyntax {
    /// `int`, `string`, ...
    Predefined(PredefinedType),
    /// A named type.
    Name(NameSyntax),
    /// `T[]`, `T[,]`
    Array { element: Box<TypeSyntax>, rank: usize },
    /// `T?`
    Nullable(Box<TypeSyntax>),
}

impl TypeSyntax {
    pub fn predefined(ty: PredefinedType) -> Self {
        Self::Predefined(ty)
    }

    pub fn named(name: NameSyntax) -> Self {
        Self::Name(name)
    }

    pub fn array(element: TypeSyntax) -> Self {
        Self::Array {
            element: Box::new(element),
            rank: 1,
        }
    }

    pub fn nullable(inner: TypeSyntax) -> Self {
        Self::Nullable(Box::new(inner))
    }
}

impl From<NameSyntax> for TypeSyntax {
    fn from(name: NameSyntax) -> Self {
        Self::Name(name)
    }
}

impl From<PredefinedType> for TypeSyntax {
    fn from(ty: PredefinedType) -> Self {
        Self::Predefined(ty)
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predefined(ty) => write!(f, "{}", ty),
            Self::Name(name) => write!(f, "{}", name),
            Self::Array { element, rank } => {
                write!(f, "{}[{}]", element, ",".repeat(rank.saturating_sub(1)))
            }
            Self::Nullable(inner) => write!(f, "{}?", inner),
        }
    }
}

pub(crate) fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
