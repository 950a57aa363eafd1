use std::path::PathBuf;

use csdecl_syntax::{DeclarationKind, ParseError};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest text and filename so error factories only need the
/// details of the problem itself.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "csdecl.toml");
/// ctx.validation_error("missing namespace name");
/// ctx.reserved_keyword_error("class", "class name", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn unknown_modifier_error(
        &self,
        modifier: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownModifier {
            src: self.named_source(),
            span,
            modifier: modifier.into(),
            context: context.into(),
        })
    }

    /// Wrap a fragment parser failure for `text`.
    pub fn invalid_syntax_error(
        &self,
        text: impl Into<String>,
        context: impl Into<String>,
        source: ParseError,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidSyntax {
            src: self.named_source(),
            span,
            text: text.into(),
            context: context.into(),
            source,
        })
    }

    pub fn shape_mismatch_error(
        &self,
        kind: DeclarationKind,
        name: impl Into<String>,
        feature: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ShapeMismatch {
            src: self.named_source(),
            span,
            kind,
            name: name.into(),
            feature: feature.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse csdecl.toml")]
    #[diagnostic(code(csdecl::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(csdecl::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a C# reserved keyword ({context})")]
    #[diagnostic(
        code(csdecl::reserved_keyword),
        help("rename '{name}' or write it as the verbatim identifier '@{name}'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context}: '{name}'")]
    #[diagnostic(
        code(csdecl::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("unknown modifier '{modifier}' on {context}")]
    #[diagnostic(
        code(csdecl::unknown_modifier),
        help(
            "valid modifiers are: public, private, protected, internal, file, static, extern, new, virtual, abstract, sealed, override, readonly, unsafe, required, volatile, async, const, partial, ref"
        )
    )]
    UnknownModifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown modifier")]
        span: Option<SourceSpan>,
        modifier: String,
        context: String,
    },

    #[error("invalid {context}: '{text}'")]
    #[diagnostic(code(csdecl::invalid_syntax))]
    InvalidSyntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        text: String,
        context: String,
        #[source]
        source: ParseError,
    },

    #[error("{kind} '{name}' cannot carry {feature}")]
    #[diagnostic(
        code(csdecl::shape_mismatch),
        help("remove the key or move it to a declaration kind that supports it")
    )]
    ShapeMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("not supported on {kind}")]
        span: Option<SourceSpan>,
        kind: DeclarationKind,
        name: String,
        feature: String,
    },
}

/// Failures of [`Manifest::lower`](crate::Manifest::lower).
///
/// Validated manifests lower cleanly; these surface only for values built
/// or edited in code.
#[derive(Debug, Error, Diagnostic)]
pub enum LowerError {
    #[error("invalid fragment: {0}")]
    #[diagnostic(code(csdecl::invalid_fragment))]
    Syntax(#[from] ParseError),

    #[error("unknown modifier '{modifier}' on {context}")]
    #[diagnostic(code(csdecl::unknown_modifier))]
    UnknownModifier { modifier: String, context: String },
}
