//! [`ActorEntity`] implementation for [`Order`].

use super::actions::OrderAction;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ();
    type Error = OrderError;

    /// Builds the order record. `total_cost` is the sale price of the resolved item.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.item_name.trim().is_empty() {
            return Err(OrderError::ValidationError("item name must not be empty".into()));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            total_cost: params.item.price(),
            item_name: params.item_name,
            item: params.item,
            restaurant: params.restaurant,
            substitutions: params.substitutions,
            placed_at: params.placed_at,
            status: OrderStatus::Placed,
        })
    }

    // Orders are immutable once placed; only the status moves, through `Advance`.
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<Order, Self::Error> {
        match action {
            OrderAction::Advance => {
                let from = self.status;
                self.status = from.next();
                debug!(order_id = %self.id, %from, to = %self.status, "Status advanced");
                Ok(self.clone())
            }
        }
    }
}
