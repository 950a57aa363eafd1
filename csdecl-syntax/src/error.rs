use std::fmt;

/// Position in a parsed fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize, // Byte offset
    pub line: usize,   // Line number (1-based)
    pub column: usize, // Column number (1-based)
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors raised while parsing names, types and expressions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: Position },

    #[error("unterminated string literal at {pos}")]
    UnterminatedString { pos: Position },

    #[error("unterminated character literal at {pos}")]
    UnterminatedChar { pos: Position },

    #[error("invalid escape sequence '\\{ch}' at {pos}")]
    InvalidEscape { ch: char, pos: Position },

    #[error("expected {expected}, found {found} at {pos}")]
    Expected {
        expected: String,
        found: String,
        pos: Position,
    },

    #[error("'{keyword}' is a reserved keyword and cannot be used as {context} at {pos}")]
    ReservedKeyword {
        keyword: String,
        context: &'static str,
        pos: Position,
    },

    #[error("unexpected {found} after {parsed} at {pos}")]
    TrailingInput {
        found: String,
        parsed: &'static str,
        pos: Position,
    },

    #[error("left side of an assignment must be a name, found '{found}' at {pos}")]
    InvalidAssignmentTarget { found: String, pos: Position },

    #[error("empty input")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, ParseError>;
