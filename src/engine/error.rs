//! Error taxonomy of the order engine and its request/response mapping.

use crate::inventory::InventoryError;
use crate::model::{OrderId, TableOrderId, UserId};
use crate::order_actor::OrderError;
use crate::user_actor::UserError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way an engine operation can fail. Any failure aborts the operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The name resolves to neither a product nor a menu.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Out of stock: {0}")]
    OutOfStock(String),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Table order not found: {0}")]
    TableOrderNotFound(TableOrderId),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A collaborator failed for a reason the caller cannot act on.
    #[error("Collaborator failure: {0}")]
    Collaborator(String),
}

impl EngineError {
    /// HTTP status a REST front end should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::UserNotFound(_)
            | EngineError::ItemNotFound(_)
            | EngineError::OrderNotFound(_)
            | EngineError::TableOrderNotFound(_) => 404,
            EngineError::OutOfStock(_) => 409,
            EngineError::InvalidRequest(_) => 400,
            EngineError::Collaborator(_) => 500,
        }
    }

    /// The response body for this error.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// Single-field error payload, `{"ERROR": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "ERROR")]
    pub error: String,
}

impl From<UserError> for EngineError {
    fn from(e: UserError) -> Self {
        EngineError::Collaborator(e.to_string())
    }
}

impl From<InventoryError> for EngineError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::OutOfStock { name, .. } => EngineError::OutOfStock(name),
            other => EngineError::Collaborator(other.to_string()),
        }
    }
}

impl From<OrderError> for EngineError {
    fn from(e: OrderError) -> Self {
        EngineError::Collaborator(e.to_string())
    }
}
