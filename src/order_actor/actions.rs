//! Custom actions for the Order actor.

/// Custom actions for [`Order`](crate::model::Order) entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Moves the order to its next [`OrderStatus`](crate::model::OrderStatus) and
    /// answers with the updated order. A served order stays served.
    Advance,
}

/// Table orders have no custom actions; advancing one advances its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOrderAction {}
