//! Layout fragments and the trait nodes implement to produce them.

use super::{CodeBuilder, Indent};

/// A piece of printed layout, independent of indentation width.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line; the builder adds indentation and the newline.
    Line(String),
    Blank,
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// `header` on its own line, then `{`, the indented body and `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::Block {
                header: "{".to_string(),
                body,
                close: Some("}".to_string()),
            },
        ])
    }
}

/// Nodes that print as one or more lines of C#.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Print with 4-space indentation.
    fn to_source(&self) -> String
    where
        Self: Sized,
    {
        self.to_source_with(Indent::CSHARP)
    }

    fn to_source_with(&self, indent: Indent) -> String
    where
        Self: Sized,
    {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassDeclaration, decl::MemberDeclaration};

    #[test]
    fn test_braced_fragment() {
        let CodeFragment::Sequence(parts) = CodeFragment::braced("class Foo", vec![]) else {
            panic!("expected a sequence");
        };
        assert_eq!(parts[0], CodeFragment::Line("class Foo".to_string()));
        assert!(matches!(
            &parts[1],
            CodeFragment::Block { header, body, close }
                if header == "{" && body.is_empty() && close.as_deref() == Some("}")
        ));
    }

    #[test]
    fn test_to_source_with_indent() {
        let class = ClassDeclaration::new("Outer")
            .add_members([MemberDeclaration::from(ClassDeclaration::new("Inner"))]);
        assert_eq!(
            class.to_source_with(Indent::Spaces(2)),
            "class Outer\n{\n  class Inner\n  {\n  }\n}\n"
        );
    }
}
