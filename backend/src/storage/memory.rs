//! In-memory storage backend for tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StorageBackend, StorageError};

/// Keeps collections in a map of byte buffers
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.data.read().await.get(name).cloned())
    }

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.data
            .write()
            .await
            .insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}
