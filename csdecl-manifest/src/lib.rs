//! TOML manifest for csdecl: parsing, validation, lowering and symbols.
//!
//! A `csdecl.toml` describes one C# compilation unit. [`Manifest::from_str`]
//! and [`Manifest::from_file`] parse and validate it, reporting problems as
//! [`miette`] diagnostics that point into the manifest source.
//! [`Manifest::lower`] builds the syntax tree with the `csdecl-extensions`
//! builders, and [`Manifest::symbols`] gives the declared-symbol view used by
//! `csdecl-semantic` queries.
//!
//! [`Manifest::from_str`]: std::str::FromStr::from_str

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod manifest;
mod symbols;

pub use error::{Error, LowerError, Result, SourceContext};
pub use manifest::*;
