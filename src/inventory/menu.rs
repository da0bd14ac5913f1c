//! [`ActorEntity`] implementation for [`Menu`].

use super::actions::{apply_stock, StockAction};
use super::product::validate_entry;
use crate::framework::ActorEntity;
use crate::inventory::InventoryError;
use crate::model::{Menu, MenuCreate, MenuId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Menu {
    type Id = MenuId;
    type Create = MenuCreate;
    type Update = ();
    type Action = StockAction;
    type ActionResult = u32;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: MenuId, params: MenuCreate) -> Result<Self, Self::Error> {
        validate_entry(&params.name, &params.restaurant, params.price)?;
        Ok(Self {
            id,
            name: params.name,
            restaurant: params.restaurant,
            price: params.price,
            stock: params.stock,
            items: params.items,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: StockAction, _ctx: &()) -> Result<u32, Self::Error> {
        apply_stock(&mut self.stock, &self.name, action)
    }
}
