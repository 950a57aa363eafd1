//! Core operations.
//!
//! This module contains the work behind each csdecl command,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod inspect;
pub mod render;

pub use check::check;
pub use inspect::inspect;
pub use render::render;
