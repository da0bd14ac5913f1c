use order_engine::clients::ActorClient;
use order_engine::engine::{CompensationPolicy, EngineError};
use order_engine::lifecycle::{OrderSystem, SystemConfig};
use order_engine::model::{
    MenuCreate, MenuId, OrderId, OrderStatus, ProductCreate, ProductId, TableOrderId, UserCreate, UserId,
};
use rust_decimal::Decimal;

/// A running system seeded with one user, "Burger" (5.50) and "ComboMenuA" (12.00).
struct Fixture {
    system: OrderSystem,
    user_id: UserId,
    burger: ProductId,
    combo: MenuId,
}

async fn setup(config: SystemConfig, burger_stock: u32, combo_stock: u32) -> Fixture {
    let system = OrderSystem::with_config(&config);

    let user_id = system
        .user_client
        .create_user(UserCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .expect("Failed to create user");

    let burger = system
        .product_client
        .create_product(ProductCreate {
            name: "Burger".to_string(),
            restaurant: "Casa Pepe".to_string(),
            price: Decimal::new(550, 2),
            stock: burger_stock,
        })
        .await
        .expect("Failed to create product");

    let combo = system
        .menu_client
        .create_menu(MenuCreate {
            name: "ComboMenuA".to_string(),
            restaurant: "Casa Pepe".to_string(),
            price: Decimal::new(1200, 2),
            stock: combo_stock,
            items: vec!["Burger".to_string(), "Fries".to_string()],
        })
        .await
        .expect("Failed to create menu");

    Fixture {
        system,
        user_id,
        burger,
        combo,
    }
}

impl Fixture {
    async fn burger_stock(&self) -> u32 {
        self.system.product_client.check_stock(self.burger).await.expect("Failed to check stock")
    }

    async fn combo_stock(&self) -> u32 {
        self.system.menu_client.check_stock(self.combo).await.expect("Failed to check stock")
    }
}

/// Full end-to-end placement of a product with all real actors.
#[tokio::test]
async fn test_place_product_order() {
    let fx = setup(SystemConfig::default(), 10, 10).await;
    let engine = &fx.system.engine;

    let order = engine.place_order(fx.user_id, "Burger").await.expect("Failed to place order");

    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.user_id, fx.user_id);
    assert_eq!(order.item_name, "Burger");
    assert_eq!(order.item.kind(), "product");
    assert_eq!(order.total_cost, Decimal::new(550, 2));
    assert_eq!(order.restaurant.as_deref(), Some("Casa Pepe"));
    assert!(order.substitutions.is_empty());
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(fx.burger_stock().await, 9, "Exactly one unit should be taken");

    // The stored record matches what was returned
    let stored = engine.get_order(order.id).await.expect("Order not found");
    assert_eq!(stored, order);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_place_menu_order_leaves_product_stock_alone() {
    let fx = setup(SystemConfig::default(), 10, 2).await;

    let order = fx
        .system
        .engine
        .place_order(fx.user_id, "ComboMenuA")
        .await
        .expect("Failed to place order");

    assert_eq!(order.item.kind(), "menu");
    assert_eq!(order.total_cost, Decimal::new(1200, 2));
    assert_eq!(fx.combo_stock().await, 1);
    assert_eq!(fx.burger_stock().await, 10);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_out_of_stock_persists_nothing() {
    let fx = setup(SystemConfig::default(), 0, 0).await;
    let engine = &fx.system.engine;

    let err = engine.place_order(fx.user_id, "Burger").await.unwrap_err();
    assert_eq!(err, EngineError::OutOfStock("Burger".into()));
    assert_eq!(err.status_code(), 409);

    let err = engine.place_order(fx.user_id, "ComboMenuA").await.unwrap_err();
    assert_eq!(err, EngineError::OutOfStock("ComboMenuA".into()));

    assert!(fx.system.order_client.get(OrderId(1)).await.unwrap().is_none());
    assert_eq!(fx.burger_stock().await, 0);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_item_and_user_do_not_touch_stock() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let err = engine.place_order(fx.user_id, "Paella").await.unwrap_err();
    assert_eq!(err, EngineError::ItemNotFound("Paella".into()));

    let err = engine.place_order(UserId(42), "Burger").await.unwrap_err();
    assert_eq!(err, EngineError::UserNotFound(UserId(42)));

    let err = engine.place_order(fx.user_id, "   ").await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidRequest(_)));

    assert_eq!(fx.burger_stock().await, 5);
    assert_eq!(fx.combo_stock().await, 5);
    assert!(fx.system.order_client.get(OrderId(1)).await.unwrap().is_none());

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_same_order_twice_gets_two_ids() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let first = engine.place_order(fx.user_id, "Burger").await.unwrap();
    let second = engine.place_order(fx.user_id, "Burger").await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(fx.burger_stock().await, 3);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_substitutions_are_recorded_without_restaurant() {
    let fx = setup(SystemConfig::default(), 5, 5).await;

    let order = fx
        .system
        .engine
        .place_order_with_substitutions(
            fx.user_id,
            "Burger",
            vec!["Veggie Burger".to_string(), "Chicken Burger".to_string()],
        )
        .await
        .unwrap();

    assert_eq!(order.restaurant, None);
    assert_eq!(order.substitutions, vec!["Veggie Burger", "Chicken Burger"]);
    assert_eq!(order.total_cost, Decimal::new(550, 2));
    assert_eq!(fx.burger_stock().await, 4);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_table_order_totals() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let table = engine
        .place_table_order(fx.user_id, &["Burger", "ComboMenuA"])
        .await
        .expect("Failed to place table order");

    assert_eq!(table.total_cost, Decimal::new(1750, 2));
    assert_eq!(table.item_count, 2);
    assert_eq!(table.member_order_ids, vec![OrderId(1), OrderId(2)]);
    assert_eq!(table.products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Burger"]);
    assert_eq!(table.menus.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(), vec!["ComboMenuA"]);

    let stored = engine.get_table_order(table.id).await.unwrap();
    assert_eq!(stored, table);
    assert_eq!(fx.burger_stock().await, 4);
    assert_eq!(fx.combo_stock().await, 4);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_table_order_is_rejected() {
    let fx = setup(SystemConfig::default(), 5, 5).await;

    let names: Vec<String> = Vec::new();
    let err = fx.system.engine.place_table_order(fx.user_id, names.as_slice()).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidRequest(_)));
    assert_eq!(err.status_code(), 400);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_table_order_keeps_earlier_members_by_default() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let err = engine
        .place_table_order(fx.user_id, &["Burger", "ComboMenuA", "Paella"])
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ItemNotFound("Paella".into()));

    // No table order, but the first two members stay placed
    assert_eq!(
        engine.get_table_order(TableOrderId(1)).await.unwrap_err(),
        EngineError::TableOrderNotFound(TableOrderId(1))
    );
    assert_eq!(engine.get_order(OrderId(1)).await.unwrap().item_name, "Burger");
    assert_eq!(engine.get_order(OrderId(2)).await.unwrap().item_name, "ComboMenuA");
    assert_eq!(fx.burger_stock().await, 4);
    assert_eq!(fx.combo_stock().await, 4);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_table_order_rolls_back_with_restore_stock() {
    let config = SystemConfig {
        compensation: CompensationPolicy::RestoreStock,
        ..SystemConfig::default()
    };
    let fx = setup(config, 5, 1).await;
    let engine = &fx.system.engine;

    // The second ComboMenuA finds no stock left
    let err = engine
        .place_table_order(fx.user_id, &["Burger", "ComboMenuA", "ComboMenuA"])
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::OutOfStock("ComboMenuA".into()));

    assert_eq!(
        engine.get_order(OrderId(1)).await.unwrap_err(),
        EngineError::OrderNotFound(OrderId(1))
    );
    assert_eq!(
        engine.get_order(OrderId(2)).await.unwrap_err(),
        EngineError::OrderNotFound(OrderId(2))
    );
    assert_eq!(fx.burger_stock().await, 5);
    assert_eq!(fx.combo_stock().await, 1);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_advance_order_through_all_states() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let order = engine.place_order(fx.user_id, "Burger").await.unwrap();

    let mut statuses = Vec::new();
    for _ in 0..4 {
        statuses.push(engine.advance_order(order.id).await.unwrap().status);
    }
    assert_eq!(
        statuses,
        vec![
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Served,
            OrderStatus::Served
        ]
    );
    assert_eq!(engine.get_order(order.id).await.unwrap().status, OrderStatus::Served);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_advance_missing_order_creates_nothing() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let err = engine.advance_order(OrderId(7)).await.unwrap_err();
    assert_eq!(err, EngineError::OrderNotFound(OrderId(7)));
    assert_eq!(err.status_code(), 404);
    assert!(fx.system.order_client.get(OrderId(7)).await.unwrap().is_none());

    let err = engine.advance_table_order(TableOrderId(3)).await.unwrap_err();
    assert_eq!(err, EngineError::TableOrderNotFound(TableOrderId(3)));

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_advance_table_order_stops_at_missing_member() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let table = engine
        .place_table_order(fx.user_id, &["Burger", "ComboMenuA", "Burger"])
        .await
        .unwrap();

    // All members present: every one moves
    engine.advance_table_order(table.id).await.unwrap();
    for id in &table.member_order_ids {
        assert_eq!(engine.get_order(*id).await.unwrap().status, OrderStatus::Preparing);
    }

    // Remove the middle member: the first advances, the last is left alone
    engine.delete_order(OrderId(2)).await.unwrap();
    let err = engine.advance_table_order(table.id).await.unwrap_err();
    assert_eq!(err, EngineError::OrderNotFound(OrderId(2)));
    assert_eq!(engine.get_order(OrderId(1)).await.unwrap().status, OrderStatus::Ready);
    assert_eq!(engine.get_order(OrderId(3)).await.unwrap().status, OrderStatus::Preparing);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let fx = setup(SystemConfig::default(), 3, 0).await;

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let engine = fx.system.engine.clone();
        let user_id = fx.user_id;
        tasks.push(tokio::spawn(async move { engine.place_order(user_id, "Burger").await }));
    }

    let mut placed = 0;
    let mut sold_out = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => placed += 1,
            Err(EngineError::OutOfStock(_)) => sold_out += 1,
            Err(other) => panic!("Unexpected error: {other}"),
        }
    }

    assert_eq!(placed, 3);
    assert_eq!(sold_out, 7);
    assert_eq!(fx.burger_stock().await, 0);

    fx.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_order() {
    let fx = setup(SystemConfig::default(), 5, 5).await;
    let engine = &fx.system.engine;

    let order = engine.place_order(fx.user_id, "Burger").await.unwrap();
    engine.delete_order(order.id).await.unwrap();

    assert_eq!(
        engine.delete_order(order.id).await.unwrap_err(),
        EngineError::OrderNotFound(order.id)
    );
    // Deleting is a pure record removal
    assert_eq!(fx.burger_stock().await, 4);

    fx.system.shutdown().await.unwrap();
}

/// Several restaurants list a product under the same name: the oldest listing is served.
#[tokio::test]
async fn test_shared_product_name_resolves_to_the_oldest_listing() {
    for _ in 0..20 {
        let fx = setup(SystemConfig::default(), 10, 10).await;
        let products = &fx.system.product_client;

        let mut others = Vec::new();
        for (restaurant, cents) in [("Burger Hut", 900), ("Diner", 700)] {
            let id = products
                .create_product(ProductCreate {
                    name: "Burger".to_string(),
                    restaurant: restaurant.to_string(),
                    price: Decimal::new(cents, 2),
                    stock: 10,
                })
                .await
                .expect("Failed to create product");
            others.push(id);
        }

        let order = fx.system.engine.place_order(fx.user_id, "Burger").await.unwrap();
        assert_eq!(order.restaurant.as_deref(), Some("Casa Pepe"));
        assert_eq!(order.total_cost, Decimal::new(550, 2));

        assert_eq!(fx.burger_stock().await, 9);
        for id in others {
            assert_eq!(products.check_stock(id).await.unwrap(), 10);
        }

        fx.system.shutdown().await.unwrap();
    }
}

/// The item an order carries reports the stock left after its own unit was taken.
#[tokio::test]
async fn test_order_item_reports_remaining_stock() {
    let fx = setup(SystemConfig::default(), 10, 4).await;
    let engine = &fx.system.engine;

    let burger = engine.place_order(fx.user_id, "Burger").await.unwrap();
    assert_eq!(burger.item.stock(), fx.burger_stock().await);
    assert_eq!(burger.item.stock(), 9);

    let combo = engine.place_order(fx.user_id, "ComboMenuA").await.unwrap();
    assert_eq!(combo.item.stock(), fx.combo_stock().await);
    assert_eq!(combo.item.stock(), 3);

    let stored = engine.get_order(burger.id).await.unwrap();
    assert_eq!(stored.item.stock(), 9);

    fx.system.shutdown().await.unwrap();
}
