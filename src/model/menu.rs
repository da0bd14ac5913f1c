/// A bundle of products sold as one unit.
///
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor) exactly like
/// [`Product`](crate::model::Product), and shares its stock actions.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuId(pub u32);

impl From<u32> for MenuId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    pub restaurant: String,
    pub price: Decimal,
    pub stock: u32,
    /// Names of the bundled products. Informational only; ordering a menu never
    /// touches the stock of these products.
    pub items: Vec<String>,
}

/// Payload for adding a menu to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub name: String,
    pub restaurant: String,
    pub price: Decimal,
    pub stock: u32,
    pub items: Vec<String>,
}
