//! Durable record storage for the marketplace collections
//!
//! Each entity type lives in one named collection persisted as a JSON array.
//! A [`StorageBackend`] moves raw bytes; [`JsonStore`] layers typed
//! load/save/update on top and owns the per-collection locking discipline.

use async_trait::async_trait;
use thiserror::Error;

mod file;
mod memory;
mod store;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::JsonStore;

/// Collection names used by the services
pub mod collections {
    pub const USERS: &str = "users";
    pub const STORES: &str = "stores";
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
}

/// Errors from the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A durable byte store for named collections
///
/// `read` returns `None` when the collection has never been written;
/// `write` fully replaces the collection and must be atomic from the point
/// of view of any subsequent `read` (no reader may observe a partial write).
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError>;

    async fn write(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError>;
}
