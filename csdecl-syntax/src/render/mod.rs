//! C# source printing.
//!
//! Nodes implement [`Renderable`] and describe their layout as
//! [`CodeFragment`]s; [`CodeBuilder`] applies the [`Indent`].

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, Renderable};
pub use indent::Indent;
