//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! The format is compact and hides module paths (`with_target(false)`); the actor loop
//! tags every line with an `entity_type` field instead. `RUST_LOG` takes precedence;
//! without it the configured [`SystemConfig::log_filter`] applies.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per placement and stock move
//! RUST_LOG=debug cargo run    # full payloads and per-request lines
//! ```
//!
//! A successful `place_order` at `info` produces the lines below (timestamps trimmed).
//! Actor lines carry no request span because each actor runs in its own task. The
//! compact format lists span names before the message and appends span fields,
//! outermost span first.
//!
//! ```text
//! INFO Action ok entity_type="Product" id=product_1
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO place_order:place: Order persisted order_id=order_1 item_name="Burger" user_id=user_1 user_id=user_1 item=Burger
//! INFO place_order: Order placed order_id=order_1 kind="product" total=5.50 item_name="Burger" user_id=user_1
//! ```

use crate::lifecycle::SystemConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at process start.
pub fn setup_tracing(config: &SystemConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
