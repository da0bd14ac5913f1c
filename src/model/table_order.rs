/// Orders placed together for one table.
///
/// Built by the order store from the member [`Order`]s themselves, so the totals can
/// never drift from the members. See
/// [`impl ActorEntity for TableOrder`](#impl-ActorEntity-for-TableOrder).
use crate::model::{Menu, Order, OrderId, Product, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Table Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TableOrderId(pub u32);

impl From<u32> for TableOrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TableOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "table_order_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOrder {
    pub id: TableOrderId,
    pub user_id: UserId,
    /// Member orders in placement order.
    pub member_order_ids: Vec<OrderId>,
    /// Distinct products across members, first seen first. Each keeps the stock level
    /// recorded by the member order that first saw it.
    pub products: Vec<Product>,
    /// Distinct menus across members, first seen first.
    pub menus: Vec<Menu>,
    pub total_cost: Decimal,
    pub item_count: usize,
    pub placed_at: DateTime<Utc>,
}

/// Payload for persisting a table order from already placed members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOrderCreate {
    pub user_id: UserId,
    pub members: Vec<Order>,
    pub placed_at: DateTime<Utc>,
}
