//! # Order Engine
//!
//! > **Order placement for a multi-restaurant food-ordering platform, built on
//! > resource-oriented actors.**
//!
//! Customers order single products or bundled menus; each order takes one unit of
//! stock, and several orders can be grouped into a table order. Orders then move
//! through their fulfilment states.
//!
//! ## Architecture Notes
//!
//! ### 1. Resource Actors
//! Every store (users, products, menus, orders, table orders) is a
//! [`ResourceActor`](framework::ResourceActor): one Tokio task exclusively owning a
//! `BTreeMap` and serving requests over a channel, one at a time. The message loop is
//! written once and reused for every entity through the
//! [`ActorEntity`](framework::ActorEntity) trait.
//!
//! ### 2. Type-Safe Error Handling
//! Each actor has its own error enum (`UserError`, `InventoryError`, `OrderError`).
//! Clients downcast the framework's boxed entity errors back into them, and the engine
//! folds them into [`EngineError`](engine::EngineError), which also knows its HTTP
//! status and response body.
//!
//! ### 3. Concurrency Model
//! Actors process messages sequentially, so a stock counter needs no lock: concurrent
//! placements against the last unit are answered one after the other and exactly one
//! wins. Nothing spans two actors atomically; the engine compensates instead.
//!
//! ### 4. Observability
//! `tracing` everywhere, see [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`framework`] - generic actor, client, messages, mocks
//! - [`model`] - users, products, menus, orders, table orders
//! - [`user_actor`], [`inventory`], [`order_actor`] - the entity implementations
//! - [`clients`] - type-safe clients, including the name-based [`CatalogClient`](clients::CatalogClient)
//! - [`engine`] - the [`OrderEngine`](engine::OrderEngine)
//! - [`lifecycle`] - [`OrderSystem`](lifecycle::OrderSystem), configuration, tracing setup
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod engine;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod user_actor;
