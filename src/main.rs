//! # Order Engine Demo
//!
//! Seeds a user and a small catalog, then walks through every engine operation:
//! single placement, placement with substitutions, a table order, status advances and
//! the error paths, printing error bodies the way a REST front end would return them.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_ENGINE_COMPENSATION=restore_stock RUST_LOG=debug cargo run
//! ```

use order_engine::engine::EngineError;
use order_engine::lifecycle::{setup_tracing, OrderSystem, SystemConfig};
use order_engine::model::{MenuCreate, ProductCreate, UserCreate};
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

fn report(e: &EngineError) {
    match serde_json::to_string(&e.to_body()) {
        Ok(body) => warn!(status = e.status_code(), %body, "Request rejected"),
        Err(ser) => error!(error = %ser, "Could not serialize error body"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config);

    info!(?config, "Starting order engine demo");
    let system = OrderSystem::with_config(&config);

    // Seed data
    let user_id = async {
        let user_id = system
            .user_client
            .create_user(UserCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;

        system
            .product_client
            .create_product(ProductCreate {
                name: "Burger".to_string(),
                restaurant: "Casa Pepe".to_string(),
                price: Decimal::new(550, 2),
                stock: 3,
            })
            .await
            .map_err(|e| e.to_string())?;

        system
            .menu_client
            .create_menu(MenuCreate {
                name: "ComboMenuA".to_string(),
                restaurant: "Casa Pepe".to_string(),
                price: Decimal::new(1200, 2),
                stock: 1,
                items: vec!["Burger".to_string(), "Fries".to_string(), "Cola".to_string()],
            })
            .await
            .map_err(|e| e.to_string())?;

        Ok::<_, String>(user_id)
    }
    .instrument(tracing::info_span!("seeding"))
    .await?;

    let engine = system.engine.clone();

    // Single placement and status transitions
    let order = engine.place_order(user_id, "Burger").await.map_err(|e| e.to_string())?;
    info!(order_id = %order.id, total = %order.total_cost, "Placed");
    for _ in 0..3 {
        let advanced = engine.advance_order(order.id).await.map_err(|e| e.to_string())?;
        info!(order_id = %advanced.id, status = %advanced.status, "Advanced");
    }

    // Substitutions are recorded, not applied
    let with_subs = engine
        .place_order_with_substitutions(user_id, "Burger", vec!["Veggie Burger".to_string()])
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %with_subs.id, substitutions = ?with_subs.substitutions, "Placed with substitutions");

    // Table order: Burger 5.50 + ComboMenuA 12.00
    let table = engine
        .place_table_order(user_id, &["Burger", "ComboMenuA"])
        .await
        .map_err(|e| e.to_string())?;
    info!(table_order_id = %table.id, items = table.item_count, total = %table.total_cost, "Table placed");
    engine.advance_table_order(table.id).await.map_err(|e| e.to_string())?;

    // Error paths: stock is now exhausted, the name is unknown, the order is missing
    for attempt in [
        engine.place_order(user_id, "Burger").await.map(|_| ()),
        engine.place_order(user_id, "Paella").await.map(|_| ()),
        engine.place_table_order(user_id, &["ComboMenuA"]).await.map(|_| ()),
    ] {
        if let Err(e) = attempt {
            report(&e);
        }
    }
    if let Err(e) = engine.advance_order(order_engine::model::OrderId(999)).await {
        report(&e);
    }

    drop(engine);
    system.shutdown().await?;

    info!("Application shutdown complete.");
    Ok(())
}
