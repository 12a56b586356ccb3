//! Product service
//!
//! Products are created by a store's operator and never edited or deleted.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::Product;
use shared::validation::{validate_amount, validate_required};

use crate::error::{AppError, AppResult};
use crate::storage::{collections, JsonStore};

/// Product service for store catalogs
#[derive(Clone)]
pub struct ProductService {
    store: Arc<JsonStore>,
}

/// Input for adding a product to a store's catalog
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub store_id: i64,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// The catalog of one store
    pub async fn products_for_store(&self, store_id: i64) -> Vec<Product> {
        let products: Vec<Product> = self.store.load(collections::PRODUCTS).await;
        products
            .into_iter()
            .filter(|p| p.store_id == store_id)
            .collect()
    }

    /// Add a product to a store's catalog
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        validate_required(&input.name).map_err(|message| AppError::Validation {
            field: "name".to_string(),
            message: message.to_string(),
        })?;
        validate_amount(input.price).map_err(|message| AppError::Validation {
            field: "price".to_string(),
            message: message.to_string(),
        })?;

        let product = Product {
            id: Utc::now().timestamp_millis(),
            name: input.name,
            price: input.price,
            description: input.description,
            image: input.image.unwrap_or_default(),
            store_id: input.store_id,
            created_at: Utc::now(),
        };

        self.store
            .update(collections::PRODUCTS, |products: &mut Vec<Product>| {
                products.push(product.clone());
                Ok(product)
            })
            .await
    }
}
