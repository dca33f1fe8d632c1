//! Text assembly primitives.
//!
//! - [`CodeBuilder`] - indentation-aware text sink
//! - [`IndentGuard`] - scoped indentation handle
//! - [`Indent`] - indentation configuration

mod code_builder;

pub use bespoke_core::Indent;
pub use code_builder::{CodeBuilder, IndentGuard};
