//! Generation tree nodes.
//!
//! - [`Renderable`] - the contract every node implements
//! - [`Bespoke`] - slot whose body survives regeneration
//! - [`Module`] - a generated file and its top-level declarations
//! - [`Raw`], [`Block`] - language-neutral building blocks

mod bespoke;
mod generic;
mod module;
mod renderable;

pub use bespoke::Bespoke;
pub use generic::{Block, Raw};
pub use module::Module;
pub use renderable::{Node, Renderable, sorted, walk};
