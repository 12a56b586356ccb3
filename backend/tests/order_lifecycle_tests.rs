//! Order lifecycle tests
//!
//! Exercises the order repository over an in-memory backend: creation
//! round-trip, the courier feed filter, the claim race, and snapshot
//! isolation of embedded products.

use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use esquina_backend::error::AppError;
use esquina_backend::services::order::CreateOrderInput;
use esquina_backend::services::OrderService;
use esquina_backend::storage::{collections, JsonStore, MemoryBackend};
use shared::models::{Order, OrderItem, Product};
use shared::types::OrderStatus;

fn memory_store() -> Arc<JsonStore> {
    Arc::new(JsonStore::new(Arc::new(MemoryBackend::new())))
}

fn sample_input(user_id: i64) -> CreateOrderInput {
    CreateOrderInput {
        user_id,
        store_id: 2,
        products: vec![OrderItem {
            id: 1,
            name: "X".to_string(),
            price: Decimal::from(10),
            quantity: 2,
        }],
        total: Decimal::from(20),
        address: "Calle 5 #12".to_string(),
        payment_method: "cash".to_string(),
    }
}

fn seeded_order(id: i64, status: OrderStatus, delivery_id: Option<i64>) -> Order {
    Order {
        id,
        user_id: 1,
        store_id: 2,
        products: vec![OrderItem {
            id: 1,
            name: "X".to_string(),
            price: Decimal::from(10),
            quantity: 1,
        }],
        total: Decimal::from(10),
        address: "Calle 5 #12".to_string(),
        payment_method: "cash".to_string(),
        status,
        created_at: Utc::now(),
        delivery_id,
    }
}

#[tokio::test]
async fn create_order_round_trips_through_the_user_feed() {
    let store = memory_store();
    let service = OrderService::new(store);

    let created = service.create_order(sample_input(7)).await.unwrap();
    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(created.delivery_id, None);
    assert_eq!(created.total, Decimal::from(20));

    let orders = service.orders_for_user(7).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, created.id);
    assert_eq!(orders[0].products, created.products);
    assert_eq!(orders[0].total, Decimal::from(20));
}

#[tokio::test]
async fn user_feed_only_contains_that_users_orders() {
    let store = memory_store();
    let service = OrderService::new(store);

    service.create_order(sample_input(7)).await.unwrap();

    assert_eq!(service.orders_for_user(7).await.len(), 1);
    assert!(service.orders_for_user(8).await.is_empty());
}

#[tokio::test]
async fn available_feed_contains_pending_and_accepted_only() {
    let store = memory_store();
    let seeded = vec![
        seeded_order(1, OrderStatus::Pending, None),
        seeded_order(2, OrderStatus::Accepted, Some(9)),
        seeded_order(3, OrderStatus::InProgress, Some(9)),
        seeded_order(4, OrderStatus::Delivered, Some(9)),
    ];
    store.save(collections::ORDERS, &seeded).await.unwrap();

    let service = OrderService::new(store);
    let feed = service.available_orders().await;

    let ids: Vec<i64> = feed.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn first_claim_wins_and_the_loser_changes_nothing() {
    let store = memory_store();
    store
        .save(
            collections::ORDERS,
            &[seeded_order(1, OrderStatus::Pending, None)],
        )
        .await
        .unwrap();
    let service = OrderService::new(store.clone());

    let claimed = service
        .update_status(1, OrderStatus::Accepted, Some(100))
        .await
        .unwrap();
    assert_eq!(claimed.status, OrderStatus::Accepted);
    assert_eq!(claimed.delivery_id, Some(100));

    let err = service
        .update_status(1, OrderStatus::Accepted, Some(200))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    let stored: Vec<Order> = store.load(collections::ORDERS).await;
    assert_eq!(stored[0].status, OrderStatus::Accepted);
    assert_eq!(stored[0].delivery_id, Some(100));
}

#[tokio::test]
async fn reclaim_by_the_owner_is_idempotent() {
    let store = memory_store();
    store
        .save(
            collections::ORDERS,
            &[seeded_order(1, OrderStatus::Pending, None)],
        )
        .await
        .unwrap();
    let service = OrderService::new(store);

    service
        .update_status(1, OrderStatus::Accepted, Some(100))
        .await
        .unwrap();
    let again = service
        .update_status(1, OrderStatus::Accepted, Some(100))
        .await
        .unwrap();
    assert_eq!(again.delivery_id, Some(100));
}

#[tokio::test]
async fn bare_status_advance_succeeds_regardless_of_owner() {
    let store = memory_store();
    store
        .save(
            collections::ORDERS,
            &[seeded_order(1, OrderStatus::Accepted, Some(100))],
        )
        .await
        .unwrap();
    let service = OrderService::new(store);

    let advanced = service
        .update_status(1, OrderStatus::InProgress, None)
        .await
        .unwrap();
    assert_eq!(advanced.status, OrderStatus::InProgress);
    assert_eq!(advanced.delivery_id, Some(100));

    let delivered = service
        .update_status(1, OrderStatus::Delivered, None)
        .await
        .unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
}

#[tokio::test]
async fn updating_an_unknown_order_is_not_found_and_writes_nothing() {
    let store = memory_store();
    let seeded = vec![seeded_order(1, OrderStatus::Pending, None)];
    store.save(collections::ORDERS, &seeded).await.unwrap();
    let service = OrderService::new(store.clone());

    let err = service
        .update_status(999, OrderStatus::Accepted, Some(100))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let stored: Vec<Order> = store.load(collections::ORDERS).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, OrderStatus::Pending);
    assert_eq!(stored[0].delivery_id, None);
}

#[tokio::test]
async fn order_snapshot_is_isolated_from_later_product_changes() {
    let store = memory_store();
    let product = Product {
        id: 55,
        name: "Empanada".to_string(),
        price: Decimal::from(10),
        description: "De carne".to_string(),
        image: String::new(),
        store_id: 2,
        created_at: Utc::now(),
    };
    store.save(collections::PRODUCTS, &[product]).await.unwrap();

    let service = OrderService::new(store.clone());
    let input = CreateOrderInput {
        user_id: 7,
        store_id: 2,
        products: vec![OrderItem {
            id: 55,
            name: "Empanada".to_string(),
            price: Decimal::from(10),
            quantity: 2,
        }],
        total: Decimal::from(20),
        address: "Calle 5 #12".to_string(),
        payment_method: "cash".to_string(),
    };
    let order = service.create_order(input).await.unwrap();

    // Mutate the stored product record after the order was placed.
    store
        .update(collections::PRODUCTS, |products: &mut Vec<Product>| {
            products[0].price = Decimal::from(99);
            Ok(())
        })
        .await
        .unwrap();

    let orders = service.orders_for_user(7).await;
    assert_eq!(orders[0].id, order.id);
    assert_eq!(orders[0].products[0].price, Decimal::from(10));
}

#[tokio::test]
async fn creation_rejects_missing_required_fields() {
    let store = memory_store();
    let service = OrderService::new(store.clone());

    let mut input = sample_input(7);
    input.products.clear();
    let err = service.create_order(input).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let mut input = sample_input(7);
    input.address = "  ".to_string();
    let err = service.create_order(input).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let mut input = sample_input(7);
    input.payment_method = String::new();
    let err = service.create_order(input).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    // Nothing was persisted by the rejected attempts.
    let stored: Vec<Order> = store.load(collections::ORDERS).await;
    assert!(stored.is_empty());
}

fn status_strategy() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![
        Just(OrderStatus::Pending),
        Just(OrderStatus::Accepted),
        Just(OrderStatus::InProgress),
        Just(OrderStatus::Delivered),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Whatever sequence of status updates couriers throw at one order, a
    /// claim never displaces a different owner, and the persisted courier id
    /// always tracks the last update allowed to carry one.
    #[test]
    fn persisted_ownership_survives_arbitrary_update_sequences(
        updates in prop::collection::vec(
            (status_strategy(), prop::option::of(1i64..5)),
            1..12,
        ),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        rt.block_on(async {
            let store = memory_store();
            store
                .save(
                    collections::ORDERS,
                    &[seeded_order(1, OrderStatus::Pending, None)],
                )
                .await
                .unwrap();
            let service = OrderService::new(store.clone());
            let mut owner: Option<i64> = None;

            for (status, courier) in updates {
                let result = service.update_status(1, status, courier).await;
                match (owner, courier) {
                    (Some(current), Some(claimant))
                        if status == OrderStatus::Accepted && claimant != current =>
                    {
                        assert!(matches!(result, Err(AppError::Conflict { .. })));
                    }
                    _ => {
                        assert!(result.is_ok());
                        if courier.is_some() {
                            owner = courier;
                        }
                    }
                }

                let stored: Vec<Order> = store.load(collections::ORDERS).await;
                assert_eq!(stored[0].delivery_id, owner);
            }
        });
    }
}
