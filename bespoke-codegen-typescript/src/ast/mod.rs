//! TypeScript syntax nodes.
//!
//! Every node implements [`Renderable`](bespoke_codegen::Renderable) and can be
//! placed in a [`Module`](bespoke_codegen::Module) next to bespoke slots.

mod class;
mod fns;
mod imports;
mod interface;
mod types;

pub use class::{Class, Method, Visibility};
pub use fns::Function;
pub use imports::Import;
pub use interface::Interface;
pub use types::{Param, Property, TypeAlias};
