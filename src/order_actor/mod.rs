//! # Order Store
//!
//! Resource actors persisting [`Order`]s and [`TableOrder`]s. The store assigns ids,
//! derives the cost fields from the resolved items, and owns the fulfilment state
//! machine (see [`OrderAction::Advance`]).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`table`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`TableOrder`]
//! - [`actions`] - [`OrderAction`]
//! - [`error`] - [`OrderError`]
//! - [`new_orders()`] / [`new_table_orders()`] - Factory functions for actor + client
//!
//! Placement rules (user exists, item resolves, stock available) are not checked here;
//! they belong to the [`OrderEngine`](crate::engine::OrderEngine), which only persists
//! orders it has already validated.

pub mod actions;
pub mod entity;
pub mod error;
pub mod table;

pub use actions::*;
pub use error::*;

use crate::clients::{OrderClient, TableOrderClient};
use crate::framework::ResourceActor;
use crate::model::{Order, TableOrder};

/// Creates a new Order actor and its client.
pub fn new_orders(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}

/// Creates a new TableOrder actor and its client.
pub fn new_table_orders(buffer_size: usize) -> (ResourceActor<TableOrder>, TableOrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, TableOrderClient::new(generic_client))
}
