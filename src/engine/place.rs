//! Single-item placement, with and without substitutions.
//!
//! Both variants share one pipeline:
//!
//! 1. reject a blank item name
//! 2. check the user exists
//! 3. resolve the name to a product or menu
//! 4. take one unit of stock, recording the remaining level on the resolved item
//! 5. persist the order, stamped with the current time
//!
//! Nothing is mutated before step 4, so every failure up to and including the
//! decrement leaves inventory and the order store untouched. If step 5 fails the unit
//! is put back before the error is returned.

use super::{EngineError, OrderEngine};
use crate::model::{Order, OrderCreate, UserId};
use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};

/// How the order being placed records its restaurant and substitutions.
pub(super) enum Placement {
    /// Restaurant taken from the resolved item, no substitutions.
    Standard,
    /// Caller-declared equivalents, kept verbatim; no restaurant on the order.
    WithSubstitutions(Vec<String>),
}

impl OrderEngine {
    /// Places one order for `item_name` on behalf of `user_id`.
    ///
    /// # Errors
    /// - [`EngineError::InvalidRequest`] for a blank name
    /// - [`EngineError::UserNotFound`] if the user does not exist
    /// - [`EngineError::ItemNotFound`] if the name is neither a product nor a menu
    /// - [`EngineError::OutOfStock`] if the item has no stock left
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn place_order(&self, user_id: UserId, item_name: &str) -> Result<Order, EngineError> {
        self.place(user_id, item_name, Placement::Standard).await
    }

    /// Like [`place_order`](Self::place_order), additionally recording the substitutions
    /// the customer accepts in place of `item_name`.
    ///
    /// No substitution is performed here. The resulting order carries no restaurant.
    #[instrument(skip(self, substitutions), fields(user_id = %user_id, substitutions = substitutions.len()))]
    pub async fn place_order_with_substitutions(
        &self,
        user_id: UserId,
        item_name: &str,
        substitutions: Vec<String>,
    ) -> Result<Order, EngineError> {
        self.place(user_id, item_name, Placement::WithSubstitutions(substitutions))
            .await
    }

    pub(super) async fn place(
        &self,
        user_id: UserId,
        item_name: &str,
        placement: Placement,
    ) -> Result<Order, EngineError> {
        if item_name.trim().is_empty() {
            return Err(EngineError::InvalidRequest("item name must not be empty".into()));
        }

        if self.users.get_user(user_id).await?.is_none() {
            warn!(%user_id, "Unknown user");
            return Err(EngineError::UserNotFound(user_id));
        }

        let mut item = self
            .catalog
            .resolve(item_name)
            .await?
            .ok_or_else(|| EngineError::ItemNotFound(item_name.to_string()))?;

        let remaining = self.catalog.decrement(&item).await?;
        item.set_stock(remaining);
        debug!(item = item.name(), kind = item.kind(), remaining, "Stock decremented");

        let (restaurant, substitutions) = match placement {
            Placement::Standard => (Some(item.restaurant().to_string()), Vec::new()),
            Placement::WithSubstitutions(substitutions) => (None, substitutions),
        };
        let params = OrderCreate {
            user_id,
            item_name: item_name.to_string(),
            item: item.clone(),
            restaurant,
            substitutions,
            placed_at: Utc::now(),
        };

        match self.orders.place(params).await {
            Ok(order) => {
                info!(order_id = %order.id, kind = item.kind(), total = %order.total_cost, "Order placed");
                Ok(order)
            }
            Err(e) => {
                warn!(error = %e, "Persisting order failed, restoring stock");
                if let Err(restore_err) = self.catalog.restore(&item).await {
                    error!(item = item.name(), error = %restore_err, "Stock restore failed");
                }
                Err(e.into())
            }
        }
    }
}
