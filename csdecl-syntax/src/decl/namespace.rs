//! Namespaces, compilation units and using-directives.

use std::fmt;

use super::{MemberDeclaration, member_fragments};
use crate::{
    HasUsings, NameSyntax, SyntaxList,
    render::{CodeFragment, Renderable},
};

/// `using Name;`, `using static Name;` or `using Alias = Name;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsingDirectiveSyntax {
    name: NameSyntax,
    alias: Option<String>,
    is_static: bool,
}

impl UsingDirectiveSyntax {
    pub fn new(name: NameSyntax) -> Self {
        Self {
            name,
            alias: None,
            is_static: false,
        }
    }

    pub fn name(&self) -> &NameSyntax {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn with_alias(&self, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..self.clone()
        }
    }

    pub fn with_static(&self, is_static: bool) -> Self {
        Self {
            is_static,
            ..self.clone()
        }
    }
}

impl fmt::Display for UsingDirectiveSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("using ")?;
        if self.is_static {
            f.write_str("static ")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, "{} = ", alias)?;
        }
        write!(f, "{};", self.name)
    }
}

/// `namespace Name { usings members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDeclaration {
    name: NameSyntax,
    usings: SyntaxList<UsingDirectiveSyntax>,
    members: SyntaxList<MemberDeclaration>,
}

impl NamespaceDeclaration {
    pub fn new(name: NameSyntax) -> Self {
        Self {
            name,
            usings: SyntaxList::new(),
            members: SyntaxList::new(),
        }
    }

    pub fn name(&self) -> &NameSyntax {
        &self.name
    }

    pub fn members(&self) -> &SyntaxList<MemberDeclaration> {
        &self.members
    }

    pub fn add_members(&self, members: impl IntoIterator<Item = MemberDeclaration>) -> Self {
        Self {
            members: self.members.add_range(members),
            ..self.clone()
        }
    }
}

impl HasUsings for NamespaceDeclaration {
    fn usings(&self) -> &SyntaxList<UsingDirectiveSyntax> {
        &self.usings
    }

    fn with_using_directives(&self, usings: SyntaxList<UsingDirectiveSyntax>) -> Self {
        Self {
            usings,
            ..self.clone()
        }
    }
}

impl Renderable for NamespaceDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("namespace {}", self.name),
            body_fragments(&self.usings, &self.members),
        )]
    }
}

/// The root of a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    usings: SyntaxList<UsingDirectiveSyntax>,
    members: SyntaxList<MemberDeclaration>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &SyntaxList<MemberDeclaration> {
        &self.members
    }

    pub fn add_members(&self, members: impl IntoIterator<Item = MemberDeclaration>) -> Self {
        Self {
            usings: self.usings.clone(),
            members: self.members.add_range(members),
        }
    }
}

impl HasUsings for CompilationUnit {
    fn usings(&self) -> &SyntaxList<UsingDirectiveSyntax> {
        &self.usings
    }

    fn with_using_directives(&self, usings: SyntaxList<UsingDirectiveSyntax>) -> Self {
        Self {
            usings,
            members: self.members.clone(),
        }
    }
}

impl Renderable for CompilationUnit {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        body_fragments(&self.usings, &self.members)
    }
}

impl_display_via_source!(NamespaceDeclaration, CompilationUnit);

fn body_fragments(
    usings: &SyntaxList<UsingDirectiveSyntax>,
    members: &[MemberDeclaration],
) -> Vec<CodeFragment> {
    let mut fragments: Vec<CodeFragment> = usings
        .iter()
        .map(|using| CodeFragment::Line(using.to_string()))
        .collect();
    if !usings.is_empty() && !members.is_empty() {
        fragments.push(CodeFragment::Blank);
    }
    fragments.extend(member_fragments(members));
    fragments
}
