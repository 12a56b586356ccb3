//! Store and product repository tests

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use esquina_backend::error::AppError;
use esquina_backend::services::product::CreateProductInput;
use esquina_backend::services::{ProductService, StoreService};
use esquina_backend::storage::{collections, JsonStore, MemoryBackend};
use shared::models::{Product, Store};

fn memory_store() -> Arc<JsonStore> {
    Arc::new(JsonStore::new(Arc::new(MemoryBackend::new())))
}

fn sample_store(id: i64) -> Store {
    Store {
        id,
        name: format!("Store {}", id),
        description: "Comida casera".to_string(),
        image: String::new(),
        rating: Decimal::new(45, 1),
        delivery_time: "20-30 min".to_string(),
        is_open: true,
    }
}

fn product_input(store_id: i64, name: &str, price: Decimal) -> CreateProductInput {
    CreateProductInput {
        name: name.to_string(),
        price,
        description: "Rico".to_string(),
        image: None,
        store_id,
    }
}

#[tokio::test]
async fn list_stores_returns_the_whole_collection() {
    let store = memory_store();
    store
        .save(collections::STORES, &[sample_store(1), sample_store(2)])
        .await
        .unwrap();

    let service = StoreService::new(store);
    let stores = service.list_stores().await;
    assert_eq!(stores.len(), 2);
}

#[tokio::test]
async fn toggling_a_store_persists_the_new_state() {
    let store = memory_store();
    store
        .save(collections::STORES, &[sample_store(1)])
        .await
        .unwrap();
    let service = StoreService::new(store.clone());

    let updated = service.set_store_open(1, false).await.unwrap();
    assert!(!updated.is_open);

    let stored: Vec<Store> = store.load(collections::STORES).await;
    assert!(!stored[0].is_open);
}

#[tokio::test]
async fn toggling_an_unknown_store_is_not_found() {
    let store = memory_store();
    store
        .save(collections::STORES, &[sample_store(1)])
        .await
        .unwrap();
    let service = StoreService::new(store);

    let err = service.set_store_open(99, false).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn created_product_lands_in_its_store_catalog_only() {
    let store = memory_store();
    let service = ProductService::new(store);

    let created = service
        .create_product(product_input(10, "Arepa", Decimal::from(5)))
        .await
        .unwrap();
    assert_eq!(created.store_id, 10);
    assert_eq!(created.image, "");
    assert!(created.created_at <= Utc::now());

    let catalog = service.products_for_store(10).await;
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, created.id);

    assert!(service.products_for_store(11).await.is_empty());
}

#[tokio::test]
async fn product_creation_rejects_blank_name_and_negative_price() {
    let store = memory_store();
    let service = ProductService::new(store.clone());

    let err = service
        .create_product(product_input(10, "  ", Decimal::from(5)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let err = service
        .create_product(product_input(10, "Arepa", Decimal::from(-5)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let stored: Vec<Product> = store.load(collections::PRODUCTS).await;
    assert!(stored.is_empty());
}

#[tokio::test]
async fn zero_priced_products_are_allowed() {
    let store = memory_store();
    let service = ProductService::new(store);

    let created = service
        .create_product(product_input(10, "Muestra gratis", Decimal::ZERO))
        .await
        .unwrap();
    assert_eq!(created.price, Decimal::ZERO);
}
