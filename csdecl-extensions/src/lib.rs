//! Builders that augment immutable C# declarations.
//!
//! - [`ModifiersExt`] - replace a declaration's modifier list
//! - [`BaseListExt`], [`UsingsExt`], [`AttributeExt`] - base lists, usings, attributes
//! - [`AttributeArgumentExt`] - attribute arguments, text-formatted or typed
//! - [`factory`] - namespace, attribute and field shells from strings
//!
//! All builders are extension traits with blanket implementations over the
//! capability traits of `csdecl-syntax`, so one import brings them into scope
//! for every node type that carries the slot.
//!
//! ```
//! use csdecl_extensions::prelude::*;
//! use csdecl_syntax::{ClassDeclaration, ModifierKind};
//!
//! let obsolete = factory::attribute("Obsolete")?
//!     .add_named_quoted_argument("message", "deprecated")?;
//! let class = ClassDeclaration::new("Legacy")
//!     .with_modifiers([ModifierKind::Public])
//!     .with_base_list(["IDisposable"])?
//!     .add_attribute(obsolete);
//!
//! assert!(class.to_string().starts_with("[Obsolete(message = \"deprecated\")]\npublic class Legacy : IDisposable"));
//! # Ok::<(), csdecl_syntax::ParseError>(())
//! ```

mod argument;
mod augment;
pub mod factory;
mod literal;
mod modifiers;

pub use argument::{ArgumentFormat, AttributeArgumentExt, format_argument_text};
pub use augment::{AttributeExt, BaseListExt, UsingsExt};
pub use csdecl_syntax::{ParseError, Result};
pub use literal::LiteralValue;
pub use modifiers::ModifiersExt;

/// Every builder trait plus the factory module.
pub mod prelude {
    pub use crate::{
        ArgumentFormat, AttributeArgumentExt, AttributeExt, BaseListExt, LiteralValue,
        ModifiersExt, UsingsExt, factory,
    };
}
