//! Clients for the two inventory actors.
//!
//! [`ProductClient`] and [`MenuClient`] expose the same surface, so both are generated
//! by one macro: `create_*`, `find_*_by_name` and the stock actions.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::inventory::{InventoryError, StockAction};
use crate::model::{Menu, MenuCreate, MenuId, Product, ProductCreate, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

fn map_inventory_error(e: FrameworkError) -> InventoryError {
    match e.downcast_entity::<InventoryError>() {
        Ok(typed) => typed,
        Err(FrameworkError::NotFound(id)) => InventoryError::NotFound(id),
        Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
    }
}

macro_rules! impl_inventory_client {
    ($client:ident, $entity:ident, $id:ident, $create:ident, $snake:ident) => {
        paste::paste! {
            #[doc = "Client for interacting with the `" $entity "` actor."]
            #[derive(Clone)]
            pub struct $client {
                inner: ResourceClient<$entity>,
            }

            impl $client {
                pub fn new(inner: ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[instrument(skip(self, params), fields(name = %params.name))]
                pub async fn [<create_ $snake>](&self, params: $create) -> Result<$id, InventoryError> {
                    debug!("Sending request");
                    self.inner.create(params).await.map_err(map_inventory_error)
                }

                /// Looks an entry up by its catalog name. When several entries share the name,
                /// the one created first is returned.
                #[instrument(skip(self))]
                pub async fn [<find_ $snake _by_name>](&self, name: &str) -> Result<Option<$entity>, InventoryError> {
                    debug!("Sending request");
                    let name = name.to_string();
                    self.inner
                        .find(move |entry: &$entity| entry.name == name)
                        .await
                        .map_err(map_inventory_error)
                }

                #[instrument(skip(self))]
                pub async fn check_stock(&self, id: $id) -> Result<u32, InventoryError> {
                    self.stock_action(id, StockAction::CheckStock).await
                }

                /// Takes one unit and returns what is left.
                #[instrument(skip(self))]
                pub async fn decrement_stock(&self, id: $id) -> Result<u32, InventoryError> {
                    self.stock_action(id, StockAction::Decrement(1)).await
                }

                /// Puts one unit back and returns the new level.
                #[instrument(skip(self))]
                pub async fn restore_stock(&self, id: $id) -> Result<u32, InventoryError> {
                    self.stock_action(id, StockAction::Restore(1)).await
                }

                async fn stock_action(&self, id: $id, action: StockAction) -> Result<u32, InventoryError> {
                    debug!(?action, "Sending request");
                    self.inner.perform_action(id, action).await.map_err(map_inventory_error)
                }
            }

            #[async_trait]
            impl ActorClient<$entity> for $client {
                type Error = InventoryError;

                fn inner(&self) -> &ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: FrameworkError) -> Self::Error {
                    map_inventory_error(e)
                }
            }
        }
    };
}

impl_inventory_client!(ProductClient, Product, ProductId, ProductCreate, product);
impl_inventory_client!(MenuClient, Menu, MenuId, MenuCreate, menu);
