//! Render-time environment shared by every node of one pipeline run.

use std::collections::BTreeMap;

use crate::{
    Error, Result,
    preserve::{Markers, PreservationStore},
};

/// Identifiers declared anywhere in a tree, with the node that declared each.
///
/// Built once before rendering so that `verify` hooks can check references
/// and composed fragments cannot silently declare the same name twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierRegistry {
    declared: BTreeMap<String, String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `owner` declares `name`.
    pub fn declare(&mut self, name: impl Into<String>, owner: impl Into<String>) -> Result<()> {
        let name = name.into();
        let owner = owner.into();
        if let Some(first) = self.declared.get(&name) {
            return Err(Box::new(Error::DuplicateIdentifier {
                name,
                first: first.clone(),
                second: owner,
            }));
        }
        self.declared.insert(name, owner);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declared.contains_key(name)
    }

    /// The node that declared `name`, if any.
    pub fn declared_by(&self, name: &str) -> Option<&str> {
        self.declared.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}

/// Immutable environment passed by reference through every render call.
#[derive(Debug, Clone, Default)]
pub struct Context {
    store: PreservationStore,
    markers: Markers,
    identifiers: IdentifierRegistry,
}

impl Context {
    pub fn new(store: PreservationStore, markers: Markers) -> Self {
        Self {
            store,
            markers,
            identifiers: IdentifierRegistry::new(),
        }
    }

    pub fn with_identifiers(mut self, identifiers: IdentifierRegistry) -> Self {
        self.identifiers = identifiers;
        self
    }

    pub fn store(&self) -> &PreservationStore {
        &self.store
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn identifiers(&self) -> &IdentifierRegistry {
        &self.identifiers
    }
}
