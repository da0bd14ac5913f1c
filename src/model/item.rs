use crate::model::{Menu, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The catalog entry an item name resolved to.
///
/// A name is either a single product or a bundled menu, never both and never neither,
/// so an accepted [`Order`](crate::model::Order) always carries exactly one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum ResolvedItem {
    Product(Product),
    Menu(Menu),
}

impl ResolvedItem {
    pub fn name(&self) -> &str {
        match self {
            ResolvedItem::Product(p) => &p.name,
            ResolvedItem::Menu(m) => &m.name,
        }
    }

    /// Sale price of one unit.
    pub fn price(&self) -> Decimal {
        match self {
            ResolvedItem::Product(p) => p.price,
            ResolvedItem::Menu(m) => m.price,
        }
    }

    pub fn restaurant(&self) -> &str {
        match self {
            ResolvedItem::Product(p) => &p.restaurant,
            ResolvedItem::Menu(m) => &m.restaurant,
        }
    }

    /// Units in stock as of when this snapshot was taken.
    pub fn stock(&self) -> u32 {
        match self {
            ResolvedItem::Product(p) => p.stock,
            ResolvedItem::Menu(m) => m.stock,
        }
    }

    pub fn set_stock(&mut self, stock: u32) {
        match self {
            ResolvedItem::Product(p) => p.stock = stock,
            ResolvedItem::Menu(m) => m.stock = stock,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedItem::Product(_) => "product",
            ResolvedItem::Menu(_) => "menu",
        }
    }
}

impl From<Product> for ResolvedItem {
    fn from(product: Product) -> Self {
        ResolvedItem::Product(product)
    }
}

impl From<Menu> for ResolvedItem {
    fn from(menu: Menu) -> Self {
        ResolvedItem::Menu(menu)
    }
}
