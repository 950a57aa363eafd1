//! Immutable C# declaration syntax nodes.
//!
//! This crate provides the node model that the `csdecl` builders operate on,
//! together with the small collaborators those builders need:
//!
//! - [`decl`] - Declaration nodes (classes, interfaces, enums, members, namespaces)
//! - [`factory`] - Constructors for tokens, base lists, using-directives and attribute lists
//! - [`parser`] - Name, type-name and expression parser for the fragment grammar
//! - [`render`] - C# source printing (`CodeBuilder`, `CodeFragment`, `Renderable`)
//!
//! Every node is a value: `with_*` and `add_*` return a new node and leave the
//! receiver untouched.
//!
//! ```
//! use csdecl_syntax::{ClassDeclaration, HasModifiers, ModifierKind, factory};
//!
//! let class = ClassDeclaration::new("User")
//!     .with_modifier_tokens(factory::token_list([ModifierKind::Public]));
//! assert_eq!(class.to_string(), "public class User\n{\n}\n");
//! ```

mod attribute;
mod capability;
pub mod decl;
mod error;
mod expr;
pub mod factory;
mod kind;
mod list;
mod name;
pub mod parser;
pub mod render;

pub use attribute::{
    AttributeArgumentListSyntax, AttributeArgumentSyntax, AttributeListSyntax, AttributeSyntax,
    AttributeTarget,
};
pub use capability::{HasAttributeLists, HasBaseList, HasModifiers, HasUsings};
pub use decl::*;
pub use error::{ParseError, Position, Result};
pub use expr::{
    ExpressionSyntax, LiteralExpressionSyntax, LiteralKind, PrefixOperator, quote_string,
};
pub use kind::{
    ModifierKind, PredefinedType, RESERVED_KEYWORDS, SyntaxToken, TokenList, UnknownModifier,
    is_reserved_keyword,
};
pub use list::SyntaxList;
pub use name::{NameSyntax, TypeSyntax};
