//! Validation utilities for the La Esquina marketplace

use rust_decimal::Decimal;

use crate::models::OrderItem;

/// Validate that a required text field is present
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("field cannot be empty");
    }
    Ok(())
}

/// Validate a money amount (prices and totals are never negative)
pub fn validate_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("amount cannot be negative");
    }
    Ok(())
}

/// Validate the item snapshot of a new order
pub fn validate_order_items(items: &[OrderItem]) -> Result<(), &'static str> {
    if items.is_empty() {
        return Err("order must contain at least one product");
    }
    for item in items {
        if item.quantity == 0 {
            return Err("item quantity must be at least 1");
        }
        if item.price < Decimal::ZERO {
            return Err("item price cannot be negative");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_strings() {
        assert!(validate_required("Calle 5").is_ok());
        assert!(validate_required("").is_err());
        assert!(validate_required("   ").is_err());
    }

    #[test]
    fn amount_rejects_negatives() {
        assert!(validate_amount(Decimal::ZERO).is_ok());
        assert!(validate_amount(Decimal::from(-1)).is_err());
    }

    #[test]
    fn order_items_must_be_present_and_sane() {
        assert!(validate_order_items(&[]).is_err());

        let item = OrderItem {
            id: 1,
            name: "Arepa".to_string(),
            price: Decimal::from(5),
            quantity: 0,
        };
        assert!(validate_order_items(&[item.clone()]).is_err());

        let item = OrderItem {
            quantity: 2,
            ..item
        };
        assert!(validate_order_items(&[item]).is_ok());
    }
}
