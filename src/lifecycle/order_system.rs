use crate::clients::{CatalogClient, MenuClient, OrderClient, ProductClient, TableOrderClient, UserClient};
use crate::engine::OrderEngine;
use crate::lifecycle::SystemConfig;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runs every actor of the order engine and owns their task handles.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Building the [`OrderEngine`] over the actors' clients
///
/// # Architecture
///
/// Five actors, none of which depends on another (every `Context` is `()`):
/// - **User Actor**: the user directory
/// - **Product Actor** and **Menu Actor**: the inventory ledger
/// - **Order Actor** and **TableOrder Actor**: the order store
///
/// The clients are public so callers can seed data (users, catalog) directly; order
/// placement goes through [`OrderSystem::engine`].
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let user_id = system.user_client.create_user(user).await?;
/// system.product_client.create_product(burger).await?;
///
/// let order = system.engine.place_order(user_id, "Burger").await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub table_order_client: TableOrderClient,

    /// The order engine, wired to the clients above.
    pub engine: OrderEngine,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with the default [`SystemConfig`].
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    /// Creates and initializes a new `OrderSystem` with all actors running.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: &SystemConfig) -> Self {
        let buffer = config.channel_buffer;

        // 1. Create actors
        let (user_actor, user_client) = crate::user_actor::new(buffer);
        let (product_actor, product_client) = crate::inventory::new_products(buffer);
        let (menu_actor, menu_client) = crate::inventory::new_menus(buffer);
        let (order_actor, order_client) = crate::order_actor::new_orders(buffer);
        let (table_order_actor, table_order_client) = crate::order_actor::new_table_orders(buffer);

        // 2. Start actors, none needs a context
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(table_order_actor.run(())),
        ];

        // 3. Wire the engine
        let catalog = CatalogClient::new(product_client.clone(), menu_client.clone());
        let engine = OrderEngine::new(
            user_client.clone(),
            catalog,
            order_client.clone(),
            table_order_client.clone(),
        )
        .with_compensation(config.compensation);

        info!(buffer, compensation = ?config.compensation, "Order system started");

        Self {
            user_client,
            product_client,
            menu_client,
            order_client,
            table_order_client,
            engine,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping every client (the engine's included) closes the actors' channels; each
    /// actor then leaves its loop and this waits for all of them. Clones of the engine
    /// or clients held elsewhere keep their actors alive, so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.engine);
        drop(self.user_client);
        drop(self.product_client);
        drop(self.menu_client);
        drop(self.order_client);
        drop(self.table_order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
