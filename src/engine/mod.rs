//! # Order Engine
//!
//! The business core of the system. [`OrderEngine`] validates placement requests,
//! resolves item names against the catalog, moves stock, and persists orders and
//! table orders through the order store.
//!
//! ## Operations
//!
//! - [`OrderEngine::place_order`] / [`OrderEngine::place_order_with_substitutions`]
//! - [`OrderEngine::place_table_order`]
//! - [`OrderEngine::advance_order`] / [`OrderEngine::advance_table_order`]
//! - [`OrderEngine::get_order`], [`OrderEngine::get_table_order`], [`OrderEngine::delete_order`]
//!
//! Each operation is a straight sequence of awaited collaborator calls. There is no
//! transaction across actors: a stock decrement and the order that follows it are two
//! separate steps, and the engine compensates on failure where it can (see
//! [`place`] and [`CompensationPolicy`]).

pub mod advance;
pub mod error;
pub mod place;
pub mod table;

pub use error::*;
pub use table::CompensationPolicy;

use crate::clients::{ActorClient, CatalogClient, OrderClient, TableOrderClient, UserClient};
use crate::model::{Order, OrderId, TableOrder, TableOrderId};
use crate::order_actor::OrderError;
use tracing::instrument;

/// Holds a client for every collaborator. Cloning is cheap and clones share the actors.
#[derive(Clone)]
pub struct OrderEngine {
    users: UserClient,
    catalog: CatalogClient,
    orders: OrderClient,
    table_orders: TableOrderClient,
    compensation: CompensationPolicy,
}

impl OrderEngine {
    pub fn new(
        users: UserClient,
        catalog: CatalogClient,
        orders: OrderClient,
        table_orders: TableOrderClient,
    ) -> Self {
        Self {
            users,
            catalog,
            orders,
            table_orders,
            compensation: CompensationPolicy::default(),
        }
    }

    /// Sets what happens to already placed members when a table order fails.
    pub fn with_compensation(mut self, compensation: CompensationPolicy) -> Self {
        self.compensation = compensation;
        self
    }

    /// Returns the stored order with its resolved product or menu.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, EngineError> {
        self.orders.get(id).await?.ok_or(EngineError::OrderNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn get_table_order(&self, id: TableOrderId) -> Result<TableOrder, EngineError> {
        self.table_orders
            .get(id)
            .await?
            .ok_or(EngineError::TableOrderNotFound(id))
    }

    /// Removes an order record. Stock is not restored.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), EngineError> {
        self.orders.delete(id).await.map_err(|e| match e {
            OrderError::NotFound(_) => EngineError::OrderNotFound(id),
            other => other.into(),
        })
    }
}
