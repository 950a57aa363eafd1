//! Turns fragment trees into indented source text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates printed source, one indented line at a time.
///
/// ```
/// use csdecl_syntax::{ClassDeclaration, render::{CodeBuilder, Indent}};
///
/// let mut builder = CodeBuilder::new(Indent::Tab);
/// builder.emit(&ClassDeclaration::new("User"));
/// assert_eq!(builder.build(), "class User\n{\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder using 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Print every fragment of `node` at the current depth.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.line(&text),
            // Blank lines carry no indentation
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(&header);
                self.depth += 1;
                for inner in body {
                    self.apply(inner);
                }
                self.depth -= 1;
                if let Some(close) = close {
                    self.line(&close);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for inner in fragments {
                    self.apply(inner);
                }
            }
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}
