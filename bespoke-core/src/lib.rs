//! Core utilities and types for the Bespoke code generator.
//!
//! This crate provides the fundamental types shared by the engine and the
//! language crates: indentation and comment syntax, the generator
//! configuration, and the file layer (read-if-exists, atomic replace).

mod comment;
mod config;
mod error;
mod file;
mod indent;

pub use comment::CommentStyle;
pub use config::Config;
pub use error::ConfigError;
// File operations
pub use file::{File, FileRules, WriteResult, read_existing, write_atomic};
pub use indent::Indent;
