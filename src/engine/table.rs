//! Table-order composition.

use super::place::Placement;
use super::{EngineError, OrderEngine};
use crate::clients::ActorClient;
use crate::model::{Order, TableOrder, TableOrderCreate, UserId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

/// What happens to the members already placed when a table order fails part way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationPolicy {
    /// Placed members stay persisted with their stock taken.
    #[default]
    Disabled,
    /// Placed members are rolled back newest first: stock restored, order deleted.
    RestoreStock,
}

impl OrderEngine {
    /// Places one order per name, in order, then persists a [`TableOrder`] over them.
    ///
    /// The first failing item aborts the composition with that item's error and no
    /// table order is stored. Members placed before the failure are handled according
    /// to the engine's [`CompensationPolicy`].
    #[instrument(skip(self, item_names), fields(user_id = %user_id, items = item_names.len()))]
    pub async fn place_table_order<S>(&self, user_id: UserId, item_names: &[S]) -> Result<TableOrder, EngineError>
    where
        S: AsRef<str> + Sync,
    {
        if item_names.is_empty() {
            return Err(EngineError::InvalidRequest("table order needs at least one item".into()));
        }

        let mut members: Vec<Order> = Vec::with_capacity(item_names.len());
        for name in item_names {
            match self.place(user_id, name.as_ref(), Placement::Standard).await {
                Ok(order) => members.push(order),
                Err(e) => {
                    warn!(item = name.as_ref(), placed = members.len(), error = %e, "Table order aborted");
                    self.compensate(&members).await;
                    return Err(e);
                }
            }
        }

        let params = TableOrderCreate {
            user_id,
            members: members.clone(),
            placed_at: Utc::now(),
        };
        match self.table_orders.place(params).await {
            Ok(table) => {
                info!(table_order_id = %table.id, items = table.item_count, total = %table.total_cost, "Table order placed");
                Ok(table)
            }
            Err(e) => {
                warn!(error = %e, "Persisting table order failed");
                self.compensate(&members).await;
                Err(e.into())
            }
        }
    }

    async fn compensate(&self, placed: &[Order]) {
        if placed.is_empty() {
            return;
        }
        if self.compensation == CompensationPolicy::Disabled {
            info!(kept = placed.len(), "Keeping members placed before the failure");
            return;
        }

        for order in placed.iter().rev() {
            if let Err(e) = self.catalog.restore(&order.item).await {
                error!(order_id = %order.id, error = %e, "Stock restore failed during rollback");
            }
            if let Err(e) = self.orders.delete(order.id).await {
                error!(order_id = %order.id, error = %e, "Order delete failed during rollback");
            }
        }
        info!(rolled_back = placed.len(), "Table order members rolled back");
    }
}
