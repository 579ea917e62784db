//! In-memory key-value store

use crate::error::StorageError;
use deck_core::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Volatile key-value store
///
/// Clones share the same map, so a host (or a test) can keep a handle to the
/// data a `PlaybackManager` writes and hand it to the next session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored keys
    ///
    /// Counts the map even after a writer panicked; `get` and `set` report
    /// that case as [`StorageError::Poisoned`].
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> deck_core::Result<Option<String>> {
        let map = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> deck_core::Result<()> {
        let mut map = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
