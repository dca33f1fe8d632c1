//! Batch generation of several modules with one pipeline.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = ModuleRegistry::new();
//! registry.register(jest("src/math.test.ts", ["adds", "subtracts"]));
//! registry.register(react("src/App.tsx", "App", None, None));
//!
//! let stats = registry.write_all(&Pipeline::new(TypeScript))?;
//! println!("{} written, {} unchanged", stats.written, stats.unchanged);
//! ```

use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use bespoke_core::WriteResult;
use eyre::{Result, WrapErr, bail};

use crate::{Module, pipeline::Pipeline};

/// Modules to generate together.
///
/// Each module is validated, rendered and written independently; the first
/// failure stops the batch and names the destination it happened on.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
}

impl ModuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module.
    pub fn register(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Register multiple modules.
    pub fn register_all(&mut self, modules: impl IntoIterator<Item = Module>) {
        self.modules.extend(modules);
    }

    /// Registered modules in registration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Get the number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Render every module against its current destination without writing.
    pub fn preview_all(&self, pipeline: &Pipeline) -> Result<Vec<PreviewEntry>> {
        self.check_destinations()?;
        self.modules
            .iter()
            .map(|module| {
                let content = pipeline.preview(module).wrap_err_with(|| {
                    format!("failed to render {}", module.destination().display())
                })?;
                Ok(PreviewEntry {
                    path: module.destination().to_path_buf(),
                    content,
                })
            })
            .collect()
    }

    /// Generate every module. Returns statistics about what was written.
    pub fn write_all(&self, pipeline: &Pipeline) -> Result<WriteStats> {
        self.check_destinations()?;
        let mut stats = WriteStats::default();

        for module in &self.modules {
            let path = module.destination().to_path_buf();
            let result = pipeline
                .run(module)
                .wrap_err_with(|| format!("failed to generate {}", path.display()))?;
            match result {
                WriteResult::Written => {
                    stats.written += 1;
                    stats.written_paths.push(path);
                }
                WriteResult::Unchanged => {
                    stats.unchanged += 1;
                    stats.unchanged_paths.push(path);
                }
            }
        }

        Ok(stats)
    }

    /// Clear all registered modules.
    pub fn clear(&mut self) {
        self.modules.clear();
    }

    /// Destinations are compared after making them absolute and folding `.`
    /// and `..` lexically. Symlinks are not resolved.
    fn check_destinations(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for module in &self.modules {
            let destination = normalize(module.destination()).wrap_err_with(|| {
                format!("failed to resolve {}", module.destination().display())
            })?;
            if !seen.insert(destination) {
                bail!(
                    "{} is the destination of more than one module",
                    module.destination().display()
                );
            }
        }
        Ok(())
    }
}

fn normalize(path: &Path) -> std::io::Result<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Destination path.
    pub path: PathBuf,
    /// Rendered content.
    pub content: String,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of files written.
    pub written: usize,
    /// Number of files left untouched because their content was identical.
    pub unchanged: usize,
    /// Paths of written files.
    pub written_paths: Vec<PathBuf>,
    /// Paths of unchanged files.
    pub unchanged_paths: Vec<PathBuf>,
}

impl WriteStats {
    /// Total number of files processed.
    pub fn total(&self) -> usize {
        self.written + self.unchanged
    }
}
