/// One line item ordered by one user.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
use crate::model::{ResolvedItem, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
    Preparing,
    Ready,
    Served,
}

impl OrderStatus {
    /// The state an order moves to when advanced. `Served` is terminal and maps to itself.
    pub fn next(self) -> Self {
        match self {
            OrderStatus::Placed => OrderStatus::Preparing,
            OrderStatus::Preparing => OrderStatus::Ready,
            OrderStatus::Ready | OrderStatus::Served => OrderStatus::Served,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Served
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// The name the customer asked for.
    pub item_name: String,
    /// Snapshot of the product or menu at placement time.
    pub item: ResolvedItem,
    /// Restaurant of the resolved item. `None` for orders placed with substitutions.
    pub restaurant: Option<String>,
    pub total_cost: Decimal,
    /// Caller-declared equivalents, kept verbatim and in order.
    pub substitutions: Vec<String>,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Payload for persisting a new order.
///
/// There is no cost field: the store derives `total_cost` from `item`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub item_name: String,
    pub item: ResolvedItem,
    pub restaurant: Option<String>,
    pub substitutions: Vec<String>,
    pub placed_at: DateTime<Utc>,
}
