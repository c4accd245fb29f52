//! Name-based registry of entry-point types.
//!
//! Stands in for runtime type lookup: a host that links an optional
//! dependency registers its adapter under the dependency's fully-qualified
//! type name. Anything not registered resolves to [`Resolution::Absent`].

use std::collections::HashMap;

use super::{DependencyHandle, DependencyResolver, Resolution};

/// Registry of entry-point types keyed by fully-qualified name.
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<String, Box<dyn DependencyHandle>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under `type_name`, replacing any previous one.
    pub fn register(&mut self, type_name: impl Into<String>, handle: Box<dyn DependencyHandle>) {
        self.types.insert(type_name.into(), handle);
    }

    /// Whether `type_name` is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl DependencyResolver for TypeRegistry {
    fn resolve(&self, type_name: &str) -> Resolution<'_> {
        match self.types.get(type_name) {
            Some(handle) => Resolution::Present(handle.as_ref()),
            None => Resolution::Absent,
        }
    }
}
