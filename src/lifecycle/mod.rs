//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors, plus the process-level concerns that go
//! with it.
//!
//! - [`OrderSystem`] - spawns every actor, builds the [`OrderEngine`](crate::engine::OrderEngine)
//!   and shuts everything down
//! - [`SystemConfig`] - configuration loaded with `figment`
//! - [`setup_tracing`] - installs the log subscriber
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Process remaining messages, log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! The actors have no dependencies on each other, so closing order does not matter.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use self::config::*;
pub use self::order_system::*;
pub use self::tracing::setup_tracing;
