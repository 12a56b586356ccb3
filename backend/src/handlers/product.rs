//! Product HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::services::product::CreateProductInput;
use crate::services::ProductService;
use crate::AppState;

/// List the products of a store
pub async fn list_products(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> impl IntoResponse {
    let service = ProductService::new(state.store.clone());

    let products = service.products_for_store(store_id).await;
    (StatusCode::OK, Json(products))
}

/// Add a product to a store's catalog
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> impl IntoResponse {
    let service = ProductService::new(state.store.clone());

    match service.create_product(input).await {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "product": product })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
