//! Declared-symbol model and attribute queries.
//!
//! The model mirrors what a compiler's semantic layer exposes for a type:
//! its members by kind, the attributes applied to it and the typed constants
//! passed to those attributes. It is built from declarations, never bound
//! against referenced assemblies.

mod constant;
mod error;
mod query;
mod symbol;

pub use constant::{ConstantValue, FromConstant, TypedConstant, TypedConstantKind};
pub use error::{Error, Result};
pub use query::{AttributeQueries, HasAttributes, PRIMITIVE_TYPE_NAMES, is_primitive, value_or_default};
pub use symbol::{
    AttributeData, EventSymbol, FieldSymbol, MethodSymbol, ParameterSymbol, PropertySymbol,
    Symbol, SymbolKind, TypeKind, TypeSymbol,
};
