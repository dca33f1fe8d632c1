//! TypeScript support for the Bespoke code generator.
//!
//! This crate provides the [`TypeScript`] language, syntax nodes for the
//! declarations a scaffold usually needs, and two ready-made scaffolds.
//!
//! # Usage
//!
//! ```no_run
//! use bespoke_codegen::Pipeline;
//! use bespoke_codegen_typescript::{TypeScript, generators::jest};
//!
//! let module = jest("src/math.test.ts", ["adds", "subtracts"]);
//! Pipeline::new(TypeScript).run(&module)?;
//! # Ok::<(), Box<bespoke_codegen::Error>>(())
//! ```
//!
//! Running the pipeline again keeps whatever was written inside the bespoke
//! regions of `src/math.test.ts` and regenerates everything else.

pub mod ast;
pub mod generators;
mod language;

pub use language::TypeScript;
