//! Import collection and deduplication.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::{Error, Result};

/// What a single import brings into scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportKind {
    /// A named export (`{ symbol }`).
    Named(String),
    /// The default export bound to a local name.
    Default(String),
    /// The whole module bound to an alias (`* as alias`).
    Namespace(String),
    /// Imported only for its side effects.
    SideEffect,
}

/// One imported symbol and the module it comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportSpec {
    pub source: String,
    pub kind: ImportKind,
}

impl ImportSpec {
    pub fn named(source: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: ImportKind::Named(symbol.into()),
        }
    }

    pub fn default_export(source: impl Into<String>, binding: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: ImportKind::Default(binding.into()),
        }
    }

    pub fn namespace(source: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: ImportKind::Namespace(alias.into()),
        }
    }

    pub fn side_effect(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            kind: ImportKind::SideEffect,
        }
    }
}

/// Everything imported from one module, merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportGroup {
    pub default: Option<String>,
    pub namespace: Option<String>,
    /// Named symbols (sorted for deterministic output)
    pub named: BTreeSet<String>,
}

impl ImportGroup {
    /// True when the module is imported only for its side effects.
    pub fn is_side_effect_only(&self) -> bool {
        self.default.is_none() && self.namespace.is_none() && self.named.is_empty()
    }
}

/// Tracks imports and deduplicates them by (symbol, source).
///
/// Sub-trees composed into one module may introduce the same import
/// independently; each distinct source ends up as a single [`ImportGroup`].
///
/// # Example
///
/// ```
/// use bespoke_codegen::generation::{ImportCollector, ImportSpec};
///
/// let mut imports = ImportCollector::new();
/// imports.add(&ImportSpec::named("react", "useState")).unwrap();
/// imports.add(&ImportSpec::named("react", "useState")).unwrap();
/// imports.add(&ImportSpec::default_export("react", "React")).unwrap();
///
/// assert_eq!(imports.len(), 1);
/// assert!(imports.has_symbol("react", "useState"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> merged imports
    groups: IndexMap<String, ImportGroup>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one import.
    ///
    /// Fails with [`Error::ConflictingImport`] when a module's default export
    /// or namespace is already bound to a different name.
    pub fn add(&mut self, spec: &ImportSpec) -> Result<()> {
        let group = self.groups.entry(spec.source.clone()).or_default();
        match &spec.kind {
            ImportKind::Named(symbol) => {
                group.named.insert(symbol.clone());
            }
            ImportKind::Default(binding) => {
                bind_once(&mut group.default, binding, &spec.source)?;
            }
            ImportKind::Namespace(alias) => {
                bind_once(&mut group.namespace, alias, &spec.source)?;
            }
            ImportKind::SideEffect => {}
        }
        Ok(())
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) -> Result<()> {
        for (module, group) in &other.groups {
            if group.is_side_effect_only() {
                self.add(&ImportSpec::side_effect(module.as_str()))?;
            }
            if let Some(binding) = &group.default {
                self.add(&ImportSpec::default_export(module.as_str(), binding.as_str()))?;
            }
            if let Some(alias) = &group.namespace {
                self.add(&ImportSpec::namespace(module.as_str(), alias.as_str()))?;
            }
            for symbol in &group.named {
                self.add(&ImportSpec::named(module.as_str(), symbol.as_str()))?;
            }
        }
        Ok(())
    }

    /// Check if a module is already imported.
    pub fn has_module(&self, module: &str) -> bool {
        self.groups.contains_key(module)
    }

    /// Check if a specific named symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.groups
            .get(module)
            .is_some_and(|group| group.named.contains(symbol))
    }

    /// Iterate over all groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImportGroup)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Groups sorted by module for output that does not depend on tree order.
    pub fn sorted(&self) -> Vec<(&str, &ImportGroup)> {
        let mut groups: Vec<_> = self.iter().collect();
        groups.sort_by_key(|(module, _)| *module);
        groups
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

fn bind_once(slot: &mut Option<String>, binding: &str, module: &str) -> Result<()> {
    match slot {
        Some(existing) if existing.as_str() != binding => Err(Box::new(Error::ConflictingImport {
            module: module.to_string(),
            existing: existing.clone(),
            incoming: binding.to_string(),
        })),
        Some(_) => Ok(()),
        None => {
            *slot = Some(binding.to_string());
            Ok(())
        }
    }
}
