//! Order service: creation, listing feeds and the lifecycle transitions
//!
//! Every mutation is one load-mutate-save cycle over the orders collection,
//! run under the collection lock inside [`JsonStore::update`] so the claim
//! check cannot race with a concurrent writer.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::models::{Order, OrderItem};
use shared::types::OrderStatus;
use shared::validation::{validate_order_items, validate_required};

use crate::error::{AppError, AppResult};
use crate::storage::{collections, JsonStore};

/// Order service for the consumer and courier flows
#[derive(Clone)]
pub struct OrderService {
    store: Arc<JsonStore>,
}

/// Input for placing an order
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub user_id: i64,
    pub store_id: i64,
    pub products: Vec<OrderItem>,
    pub total: Decimal,
    pub address: String,
    pub payment_method: String,
}

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Place a new order
    ///
    /// The products are stored as a snapshot copy; the stored total is the
    /// client-computed value, recomputed here only to flag drift in the logs.
    pub async fn create_order(&self, input: CreateOrderInput) -> AppResult<Order> {
        validate_order_items(&input.products).map_err(|message| AppError::Validation {
            field: "products".to_string(),
            message: message.to_string(),
        })?;
        validate_required(&input.address).map_err(|message| AppError::Validation {
            field: "address".to_string(),
            message: message.to_string(),
        })?;
        validate_required(&input.payment_method).map_err(|message| AppError::Validation {
            field: "paymentMethod".to_string(),
            message: message.to_string(),
        })?;

        let order = Order {
            id: Utc::now().timestamp_millis(),
            user_id: input.user_id,
            store_id: input.store_id,
            products: input.products,
            total: input.total,
            address: input.address,
            payment_method: input.payment_method,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            delivery_id: None,
        };

        let recomputed = order.items_total();
        if recomputed != order.total {
            tracing::warn!(
                order_id = order.id,
                client_total = %order.total,
                items_total = %recomputed,
                "order total does not match its item snapshot"
            );
        }

        self.store
            .update(collections::ORDERS, |orders: &mut Vec<Order>| {
                orders.push(order.clone());
                Ok(order)
            })
            .await
    }

    /// All orders placed by a user, in natural collection order
    pub async fn orders_for_user(&self, user_id: i64) -> Vec<Order> {
        let orders: Vec<Order> = self.store.load(collections::ORDERS).await;
        orders.into_iter().filter(|o| o.user_id == user_id).collect()
    }

    /// The courier feed: orders with status pending or accepted
    ///
    /// Accepted orders stay in the feed so the assigned courier can keep
    /// acting on them; clients filter by `deliveryId` for unclaimed only.
    pub async fn available_orders(&self) -> Vec<Order> {
        let orders: Vec<Order> = self.store.load(collections::ORDERS).await;
        orders.into_iter().filter(Order::is_available).collect()
    }

    /// Advance an order through its lifecycle
    ///
    /// Applies the claim rule: a transition to `accepted` carrying a courier
    /// id fails when another courier already owns the order. A losing claim
    /// or an unknown id leaves the stored collection untouched.
    pub async fn update_status(
        &self,
        order_id: i64,
        status: OrderStatus,
        delivery_id: Option<i64>,
    ) -> AppResult<Order> {
        let order = self
            .store
            .update(collections::ORDERS, |orders: &mut Vec<Order>| {
                let order = orders
                    .iter_mut()
                    .find(|o| o.id == order_id)
                    .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

                order
                    .apply_status(status, delivery_id)
                    .map_err(|_| AppError::Conflict {
                        resource: "order".to_string(),
                        message: "This order was already taken by another courier".to_string(),
                    })?;

                Ok(order.clone())
            })
            .await?;

        tracing::info!(
            order_id,
            status = status.as_str(),
            delivery_id = ?delivery_id,
            "order status updated"
        );
        Ok(order)
    }
}
