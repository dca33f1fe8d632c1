//! Generation outputs.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`ModuleRegistry`] - Batch rendering and writing of modules

mod imports;
mod registry;

pub use imports::{ImportCollector, ImportGroup, ImportKind, ImportSpec};
pub use registry::{ModuleRegistry, PreviewEntry, WriteStats};
