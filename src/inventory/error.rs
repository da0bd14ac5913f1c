//! Error types for the inventory actors.

use thiserror::Error;

/// Errors that can occur during product and menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested product or menu was not found.
    #[error("Catalog entry not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Out of stock: {name} (requested {requested}, available {available})")]
    OutOfStock { name: String, requested: u32, available: u32 },

    /// A stock movement of zero units, or one that would overflow the counter.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The catalog data provided is invalid.
    #[error("Catalog validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
