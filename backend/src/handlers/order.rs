//! Order HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::types::OrderStatus;

use crate::services::order::CreateOrderInput;
use crate::services::OrderService;
use crate::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_id: Option<i64>,
}

/// Place a new order
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderInput>,
) -> impl IntoResponse {
    let service = OrderService::new(state.store.clone());

    match service.create_order(input).await {
        Ok(order) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "order": order })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// List a user's orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    let service = OrderService::new(state.store.clone());

    let orders = service.orders_for_user(user_id).await;
    (StatusCode::OK, Json(orders))
}

/// The courier feed of pending and accepted orders
pub async fn list_available_orders(State(state): State<AppState>) -> impl IntoResponse {
    let service = OrderService::new(state.store.clone());

    let orders = service.available_orders().await;
    (StatusCode::OK, Json(orders))
}

/// Advance an order's status, claiming it when a courier id is supplied
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Json(body): Json<UpdateOrderStatusRequest>,
) -> impl IntoResponse {
    let service = OrderService::new(state.store.clone());

    match service
        .update_status(order_id, body.status, body.delivery_id)
        .await
    {
        Ok(order) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "order": order })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
