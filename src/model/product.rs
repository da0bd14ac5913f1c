/// A single sellable inventory item.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Custom actions ([`StockAction`](crate::inventory::StockAction))
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Name of the restaurant selling this product.
    pub restaurant: String,
    /// Sale price.
    pub price: Decimal,
    /// Units available.
    pub stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Product name, unique across products and menus
    /// * `restaurant` - Restaurant selling the product
    /// * `price` - Sale price
    /// * `stock` - Available units
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        restaurant: impl Into<String>,
        price: Decimal,
        stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            restaurant: restaurant.into(),
            price,
            stock,
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub restaurant: String,
    pub price: Decimal,
    pub stock: u32,
}
