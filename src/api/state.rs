//! Application state for the pharmacy compliance API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::store::PharmacyStore;

/// Shared application state.
///
/// Holds the read-only seed configuration and the mutable store. When a
/// store path is set, every successful mutation is written back to disk.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<RwLock<PharmacyStore>>,
    store_path: Option<Arc<PathBuf>>,
}

impl AppState {
    /// Creates a new application state with an in-memory store.
    pub fn new(config: ConfigLoader, store: PharmacyStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
            store_path: None,
        }
    }

    /// Persists the store to `path` after every mutation.
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(Arc::new(path.into()));
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared store.
    pub fn store(&self) -> &RwLock<PharmacyStore> {
        &self.store
    }

    /// Writes `store` to the configured path, if any.
    pub fn persist(&self, store: &PharmacyStore) -> EngineResult<()> {
        match &self.store_path {
            Some(path) => store.save(path.as_path()),
            None => Ok(()),
        }
    }

    /// Runs `change` on a copy of the store under the write lock.
    ///
    /// The copy replaces the shared store only once it has been persisted,
    /// so a failed change or a failed save leaves the store as it was.
    pub async fn commit<T>(
        &self,
        change: impl FnOnce(&mut PharmacyStore, &ConfigLoader) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut store = self.store.write().await;
        let mut next = store.clone();
        let value = change(&mut next, self.config())?;
        self.persist(&next)?;
        *store = next;
        Ok(value)
    }
}
