//! Code generation engine with hand-authored region preservation.
//!
//! Generators build a tree of [`Renderable`] nodes rooted in a [`Module`] and
//! hand it to a [`Pipeline`]. Every [`Bespoke`] node in the tree becomes a pair
//! of marker comments; whatever a human writes between them survives every
//! later regeneration of the file.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text buffer ([`CodeBuilder`])
//! - [`node`] - The node contract and language-neutral nodes
//! - [`preserve`] - Marker format and extraction of preserved regions
//! - [`generation`] - Import collection and batch output ([`ModuleRegistry`](generation::ModuleRegistry))
//! - [`language`] - Target language dialects
//! - [`pipeline`] - Validate, render and write one destination
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
mod context;
mod error;
pub mod generation;
pub mod language;
pub mod node;
pub mod pipeline;
pub mod preserve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, IndentGuard};
pub use context::{Context, IdentifierRegistry};
pub use error::{Error, MarkerProblem, Result};
pub use node::{Bespoke, Block, Module, Node, Raw, Renderable};
pub use pipeline::Pipeline;
