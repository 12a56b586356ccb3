//! Store models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A store on the marketplace
///
/// Long-lived reference data; `is_open` is the only mutable field, toggled
/// by the store's own operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rating: Decimal,
    pub delivery_time: String,
    pub is_open: bool,
}
