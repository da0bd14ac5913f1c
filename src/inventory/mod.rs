//! # Inventory Ledger
//!
//! Two resource actors, one for [`Product`]s and one for [`Menu`]s, that own the
//! catalog entries and their stock counters.
//!
//! ## Overview
//!
//! Products and menus are sold the same way: each unit ordered takes one from the
//! entry's own stock, and ordering a menu never touches the stock of the products
//! it bundles. Both entities therefore share [`StockAction`] and its handler.
//!
//! ## Structure
//!
//! - [`actions`] - [`StockAction`] and the shared stock arithmetic
//! - [`product`] / [`menu`] - [`ActorEntity`](crate::framework::ActorEntity) implementations
//! - [`error`] - [`InventoryError`]
//! - [`new_products()`] / [`new_menus()`] - Factory functions for actor + client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! let level = product_client.check_stock(id).await?;
//!
//! // Fails with InventoryError::OutOfStock when nothing is left
//! let remaining = product_client.decrement_stock(id).await?;
//!
//! // Compensation after a failed placement
//! product_client.restore_stock(id).await?;
//! ```

pub mod actions;
pub mod error;
pub mod menu;
pub mod product;

pub use actions::*;
pub use error::*;

use crate::clients::{MenuClient, ProductClient};
use crate::framework::ResourceActor;
use crate::model::{Menu, Product};

/// Creates a new Product actor and its client.
pub fn new_products(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}

/// Creates a new Menu actor and its client.
pub fn new_menus(buffer_size: usize) -> (ResourceActor<Menu>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
