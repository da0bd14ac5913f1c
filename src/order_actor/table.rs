//! [`ActorEntity`] implementation for [`TableOrder`].
//!
//! The aggregate fields are computed here from the member orders, which keeps
//! `item_count` and `total_cost` consistent with `member_order_ids` by construction.

use super::actions::TableOrderAction;
use crate::framework::ActorEntity;
use crate::model::{Menu, Product, ResolvedItem, TableOrder, TableOrderCreate, TableOrderId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for TableOrder {
    type Id = TableOrderId;
    type Create = TableOrderCreate;
    type Update = ();
    type Action = TableOrderAction;
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: TableOrderId, params: TableOrderCreate) -> Result<Self, Self::Error> {
        if params.members.is_empty() {
            return Err(OrderError::ValidationError(format!("{id} has no member orders")));
        }

        let mut products: Vec<Product> = Vec::new();
        let mut menus: Vec<Menu> = Vec::new();
        let mut total_cost = Decimal::ZERO;
        let mut member_order_ids = Vec::with_capacity(params.members.len());

        for member in params.members {
            total_cost += member.total_cost;
            member_order_ids.push(member.id);
            match member.item {
                ResolvedItem::Product(p) => {
                    if !products.iter().any(|seen| seen.id == p.id) {
                        products.push(p);
                    }
                }
                ResolvedItem::Menu(m) => {
                    if !menus.iter().any(|seen| seen.id == m.id) {
                        menus.push(m);
                    }
                }
            }
        }

        Ok(Self {
            id,
            user_id: params.user_id,
            item_count: member_order_ids.len(),
            member_order_ids,
            products,
            menus,
            total_cost,
            placed_at: params.placed_at,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: TableOrderAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
