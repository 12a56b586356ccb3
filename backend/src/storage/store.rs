//! Typed access to the JSON collections

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppResult;

use super::{StorageBackend, StorageError};

/// Typed facade over a [`StorageBackend`]
///
/// Loads and saves whole collections as JSON arrays, and serializes every
/// load-mutate-save cycle through one async mutex per collection so that a
/// check made inside [`JsonStore::update`] (such as the order claim check)
/// cannot race with another writer of the same collection.
pub struct JsonStore {
    backend: Arc<dyn StorageBackend>,
    locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl JsonStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The write lock for a collection, created on first use
    fn collection_lock(&self, name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Load a collection, failing soft
    ///
    /// A collection that was never written loads as empty; so does one whose
    /// payload cannot be read or decoded. The two cases are logged apart so
    /// "truly empty" and "unreadable" stay distinguishable in the logs.
    pub async fn load<T>(&self, name: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let bytes = match self.backend.read(name).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!(collection = name, "collection not present, loading empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(collection = name, error = %e, "collection unreadable, loading empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(collection = name, error = %e, "collection undecodable, loading empty");
                Vec::new()
            }
        }
    }

    /// Replace a collection in full
    pub async fn save<T>(&self, name: &str, records: &[T]) -> Result<(), StorageError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec_pretty(records)?;
        self.backend.write(name, &bytes).await
    }

    /// Run one load-mutate-save cycle under the collection's lock
    ///
    /// The closure mutates the loaded records; on success the collection is
    /// persisted, on failure nothing is written and the stored collection is
    /// left exactly as it was.
    pub async fn update<T, R, F>(&self, name: &str, f: F) -> AppResult<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> AppResult<R>,
    {
        let lock = self.collection_lock(name);
        let _guard = lock.lock().await;

        let mut records = self.load(name).await;
        let result = f(&mut records)?;
        self.save(name, &records).await?;
        Ok(result)
    }
}
