//! Adapter registry for name-based adapter construction
//!
//! The registry maps adapter names to factories, not instances: registering
//! stores a constructor, building runs it against a configuration. It is an
//! explicit object with a defined lifetime, owned by whoever bootstraps the
//! process and passed by reference to lookup sites.
//!
//! Registration takes `&mut self` — it is a bootstrap-time operation,
//! serialized by ownership. Lookups are `&self`, so a built registry can be
//! shared behind an `Arc` for concurrent reads.

use crate::adapter::Adapter;
use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Factory producing an adapter instance from a configuration
pub type AdapterFactory = Arc<dyn Fn(AdapterConfig) -> Result<Arc<dyn Adapter>> + Send + Sync>;

/// Name → adapter-factory mapping with duplicate detection
#[derive(Default)]
pub struct AdapterRegistry {
    factories: HashMap<String, AdapterFactory>,
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl AdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter factory under a name
    ///
    /// Names are case-sensitive. Registering a name that already exists
    /// fails with [`AdapterError::DuplicateAdapter`].
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(AdapterConfig) -> Result<Arc<dyn Adapter>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(AdapterError::DuplicateAdapter(name));
        }
        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Look up a factory by name
    ///
    /// Fails with [`AdapterError::AdapterNotFound`] if absent.
    pub fn get(&self, name: &str) -> Result<&AdapterFactory> {
        self.factories
            .get(name)
            .ok_or_else(|| AdapterError::AdapterNotFound(name.to_string()))
    }

    /// Build an adapter instance by registered name
    pub fn build(&self, name: &str, config: AdapterConfig) -> Result<Arc<dyn Adapter>> {
        let factory = self.get(name)?;
        (**factory)(config)
    }

    /// Read-only snapshot of registered names
    pub fn list_adapters(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Number of registered adapters
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
