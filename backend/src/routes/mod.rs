//! Route definitions for the La Esquina marketplace
//!
//! Routes live at the root (no version prefix): the three client apps call
//! these paths directly.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth routes
        .nest("/auth", auth_routes())
        // Store routes
        .nest("/stores", store_routes())
        // Product routes
        .nest("/products", product_routes())
        // Order routes
        .nest("/orders", order_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(handlers::login))
}

/// Store routes
fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stores))
        .route("/:store_id/status", post(handlers::update_store_status))
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_product))
        .route("/:store_id", get(handlers::list_products))
}

/// Order routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_order))
        .route("/user/:user_id", get(handlers::list_user_orders))
        .route("/available", get(handlers::list_available_orders))
        .route("/:order_id/status", patch(handlers::update_order_status))
}
