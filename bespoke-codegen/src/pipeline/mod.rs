//! End-to-end generation of one destination file.
//!
//! A [`Pipeline`] takes a [`Module`](crate::Module) through these phases:
//!
//! - validate bespoke names and uniqueness (before any I/O)
//! - read the destination and extract its preservation store
//! - build the identifier registry and run every node's `verify`
//! - render top-level declarations and hoist their imports
//! - replace the destination atomically
//!
//! Any failure aborts the run before the write, so the previous file is
//! never left half written or stripped of authored content.
//!
//! # Example
//!
//! ```ignore
//! use bespoke_codegen::{Pipeline, Module};
//! use bespoke_codegen_typescript::TypeScript;
//!
//! let pipeline = Pipeline::new(TypeScript);
//! let module = Module::new("src/a.test.ts", content);
//! pipeline.run(&module)?;
//! ```

mod phases;
mod runner;

pub use runner::Pipeline;
