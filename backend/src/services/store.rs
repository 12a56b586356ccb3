//! Store service

use std::sync::Arc;

use shared::models::Store;

use crate::error::{AppError, AppResult};
use crate::storage::{collections, JsonStore};

/// Store service for listing stores and toggling opening status
#[derive(Clone)]
pub struct StoreService {
    store: Arc<JsonStore>,
}

impl StoreService {
    /// Create a new StoreService instance
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// All stores on the marketplace
    pub async fn list_stores(&self) -> Vec<Store> {
        self.store.load(collections::STORES).await
    }

    /// Toggle whether a store accepts orders
    ///
    /// The one store mutation exposed by the system.
    pub async fn set_store_open(&self, store_id: i64, is_open: bool) -> AppResult<Store> {
        self.store
            .update(collections::STORES, |stores: &mut Vec<Store>| {
                let store = stores
                    .iter_mut()
                    .find(|s| s.id == store_id)
                    .ok_or_else(|| AppError::NotFound("Store".to_string()))?;

                store.is_open = is_open;
                Ok(store.clone())
            })
            .await
    }
}
