use crate::clients::{MenuClient, ProductClient};
use crate::inventory::InventoryError;
use crate::model::ResolvedItem;
use tracing::{debug, instrument, warn};

/// Name-based view over both inventory actors.
///
/// Resolves a requested item name to a [`ResolvedItem`] and routes stock movements to
/// the actor that owns the resolved entry.
#[derive(Clone)]
pub struct CatalogClient {
    products: ProductClient,
    menus: MenuClient,
}

impl CatalogClient {
    pub fn new(products: ProductClient, menus: MenuClient) -> Self {
        Self { products, menus }
    }

    /// Resolves `name` to a product or a menu, `Ok(None)` when it is neither.
    ///
    /// Names are expected to be unique across the catalog. If both a product and a menu
    /// carry the name, the product wins and a warning is logged.
    #[instrument(skip(self))]
    pub async fn resolve(&self, name: &str) -> Result<Option<ResolvedItem>, InventoryError> {
        let product = self.products.find_product_by_name(name).await?;
        let menu = self.menus.find_menu_by_name(name).await?;

        let resolved = match (product, menu) {
            (Some(product), Some(menu)) => {
                warn!(product_id = %product.id, menu_id = %menu.id, "Name matches a product and a menu, using the product");
                Some(ResolvedItem::Product(product))
            }
            (Some(product), None) => Some(ResolvedItem::Product(product)),
            (None, Some(menu)) => Some(ResolvedItem::Menu(menu)),
            (None, None) => None,
        };
        debug!(kind = resolved.as_ref().map(ResolvedItem::kind), "Resolved");
        Ok(resolved)
    }

    /// Takes one unit of the resolved entry out of stock.
    pub async fn decrement(&self, item: &ResolvedItem) -> Result<u32, InventoryError> {
        match item {
            ResolvedItem::Product(p) => self.products.decrement_stock(p.id).await,
            ResolvedItem::Menu(m) => self.menus.decrement_stock(m.id).await,
        }
    }

    /// Puts one unit of the resolved entry back.
    pub async fn restore(&self, item: &ResolvedItem) -> Result<u32, InventoryError> {
        match item {
            ResolvedItem::Product(p) => self.products.restore_stock(p.id).await,
            ResolvedItem::Menu(m) => self.menus.restore_stock(m.id).await,
        }
    }
}
