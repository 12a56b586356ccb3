//! Store HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::services::StoreService;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreStatusRequest {
    pub is_open: bool,
}

/// List all stores
pub async fn list_stores(State(state): State<AppState>) -> impl IntoResponse {
    let service = StoreService::new(state.store.clone());

    let stores = service.list_stores().await;
    (StatusCode::OK, Json(stores))
}

/// Open or close a store
pub async fn update_store_status(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
    Json(body): Json<UpdateStoreStatusRequest>,
) -> impl IntoResponse {
    let service = StoreService::new(state.store.clone());

    match service.set_store_open(store_id, body.is_open).await {
        Ok(store) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "store": store })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
