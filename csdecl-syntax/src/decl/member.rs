use std::fmt;

use super::{
    ClassDeclaration, EnumDeclaration, FieldDeclaration, InterfaceDeclaration, MethodDeclaration,
    NamespaceDeclaration, PropertyDeclaration,
};
use crate::render::{CodeFragment, Renderable};

/// The shape of a declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Namespace,
    Class,
    Interface,
    Enum,
    EnumMember,
    Field,
    Property,
    Method,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::EnumMember => "enum member",
            Self::Field => "field",
            Self::Property => "property",
            Self::Method => "method",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any declaration that can appear inside a namespace or a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberDeclaration {
    Namespace(NamespaceDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Enum(EnumDeclaration),
    Field(FieldDeclaration),
    Property(PropertyDeclaration),
    Method(MethodDeclaration),
}

impl MemberDeclaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Namespace(_) => DeclarationKind::Namespace,
            Self::Class(_) => DeclarationKind::Class,
            Self::Interface(_) => DeclarationKind::Interface,
            Self::Enum(_) => DeclarationKind::Enum,
            Self::Field(_) => DeclarationKind::Field,
            Self::Property(_) => DeclarationKind::Property,
            Self::Method(_) => DeclarationKind::Method,
        }
    }

    /// Fields and properties, which print without blank lines between them.
    pub(crate) fn is_data_member(&self) -> bool {
        matches!(self, Self::Field(_) | Self::Property(_))
    }
}

impl Renderable for MemberDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Namespace(decl) => decl.to_fragments(),
            Self::Class(decl) => decl.to_fragments(),
            Self::Interface(decl) => decl.to_fragments(),
            Self::Enum(decl) => decl.to_fragments(),
            Self::Field(decl) => decl.to_fragments(),
            Self::Property(decl) => decl.to_fragments(),
            Self::Method(decl) => decl.to_fragments(),
        }
    }
}

impl_display_via_source!(MemberDeclaration);

impl From<NamespaceDeclaration> for MemberDeclaration {
    fn from(decl: NamespaceDeclaration) -> Self {
        Self::Namespace(decl)
    }
}

impl From<ClassDeclaration> for MemberDeclaration {
    fn from(decl: ClassDeclaration) -> Self {
        Self::Class(decl)
    }
}

impl From<InterfaceDeclaration> for MemberDeclaration {
    fn from(decl: InterfaceDeclaration) -> Self {
        Self::Interface(decl)
    }
}

impl From<EnumDeclaration> for MemberDeclaration {
    fn from(decl: EnumDeclaration) -> Self {
        Self::Enum(decl)
    }
}

impl From<FieldDeclaration> for MemberDeclaration {
    fn from(decl: FieldDeclaration) -> Self {
        Self::Field(decl)
    }
}

impl From<PropertyDeclaration> for MemberDeclaration {
    fn from(decl: PropertyDeclaration) -> Self {
        Self::Property(decl)
    }
}

impl From<MethodDeclaration> for MemberDeclaration {
    fn from(decl: MethodDeclaration) -> Self {
        Self::Method(decl)
    }
}
