//! Order models and the order lifecycle rules

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::OrderStatus;

/// A line item inside an order
///
/// Denormalized snapshot of the product at order-creation time. Later
/// changes to the products collection must not affect existing orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderItem {
    /// Line total for this item
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// An order placed by a consumer
///
/// Orders are permanent records once created; there is no deletion.
/// `delivery_id` is null until a courier claims the order and, once set,
/// never moves to a different courier (see [`Order::apply_status`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub store_id: i64,
    pub products: Vec<OrderItem>,
    pub total: Decimal,
    pub address: String,
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub delivery_id: Option<i64>,
}

/// A claim attempt lost the race: the order already belongs to another courier
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("order {order_id} was already claimed by courier {owner_id}")]
pub struct ClaimConflict {
    pub order_id: i64,
    pub owner_id: i64,
}

impl Order {
    /// Sum of `price * quantity` over the item snapshot
    ///
    /// The stored `total` is the client-computed value; this recomputation
    /// exists so callers can detect drift between the two.
    pub fn items_total(&self) -> Decimal {
        self.products.iter().map(OrderItem::line_total).sum()
    }

    /// Apply a status transition, enforcing the claim rule
    ///
    /// The one check in the lifecycle: a transition to `accepted` carrying a
    /// courier id is rejected when the order is already owned by a different
    /// courier. On rejection the order is left untouched. Every other update
    /// succeeds: the status is set to the requested value and, when a courier
    /// id was supplied, it overwrites the stored one (so a re-claim by the
    /// same courier is idempotent, and a bare status update never fails).
    ///
    /// No further transition legality is checked on purpose: couriers are
    /// trusted to send sensible statuses, matching the permissive behavior
    /// clients rely on for the `in_progress`/`delivered` advances.
    pub fn apply_status(
        &mut self,
        status: OrderStatus,
        delivery_id: Option<i64>,
    ) -> Result<(), ClaimConflict> {
        if status == OrderStatus::Accepted {
            if let (Some(claimant), Some(owner)) = (delivery_id, self.delivery_id) {
                if claimant != owner {
                    return Err(ClaimConflict {
                        order_id: self.id,
                        owner_id: owner,
                    });
                }
            }
        }

        self.status = status;
        if delivery_id.is_some() {
            self.delivery_id = delivery_id;
        }
        Ok(())
    }

    /// Whether this order shows up in the courier feed
    ///
    /// Accepted orders stay visible so the assigned courier can keep acting
    /// on them; UIs filter by `delivery_id` when they want unclaimed orders
    /// only.
    pub fn is_available(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Accepted)
    }
}
