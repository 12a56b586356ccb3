//! Product models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product offered by a store
///
/// Created by the store's operator; never updated or deleted in this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub store_id: i64,
    pub created_at: DateTime<Utc>,
}
