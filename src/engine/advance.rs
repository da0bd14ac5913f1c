//! Fulfilment status transitions.

use super::{EngineError, OrderEngine};
use crate::clients::ActorClient;
use crate::model::{Order, OrderId, TableOrder, TableOrderId};
use crate::order_actor::OrderError;
use tracing::{debug, info, instrument};

impl OrderEngine {
    /// Moves an order to its next status (`placed → preparing → ready → served`).
    ///
    /// A served order stays served. Never creates a record.
    #[instrument(skip(self))]
    pub async fn advance_order(&self, id: OrderId) -> Result<Order, EngineError> {
        let order = self.orders.advance(id).await.map_err(|e| match e {
            OrderError::NotFound(_) => EngineError::OrderNotFound(id),
            other => other.into(),
        })?;
        info!(order_id = %id, status = %order.status, "Order advanced");
        Ok(order)
    }

    /// Advances every member of a table order, in member order.
    ///
    /// Stops at the first missing member and reports its id. Members advanced before
    /// that point keep their new status.
    #[instrument(skip(self))]
    pub async fn advance_table_order(&self, id: TableOrderId) -> Result<TableOrder, EngineError> {
        let table = self
            .table_orders
            .get(id)
            .await?
            .ok_or(EngineError::TableOrderNotFound(id))?;

        for member in &table.member_order_ids {
            let order = self.advance_order(*member).await?;
            debug!(order_id = %member, status = %order.status, "Member advanced");
        }
        info!(table_order_id = %id, members = table.item_count, "Table order advanced");
        Ok(table)
    }
}
