//! Stock actions shared by [`Product`](crate::model::Product) and
//! [`Menu`](crate::model::Menu) entities.

use crate::inventory::InventoryError;

/// Custom actions for catalog entries.
///
/// Every variant answers with the stock level after the action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes units out of stock.
    ///
    /// # Errors
    /// [`InventoryError::OutOfStock`] if fewer units are available than requested.
    Decrement(u32),
    /// Puts units back, e.g. when a placement is rolled back.
    Restore(u32),
}

/// Applies `action` to a stock counter and returns the resulting level.
///
/// The counter is left untouched when the action fails.
pub(crate) fn apply_stock(stock: &mut u32, name: &str, action: StockAction) -> Result<u32, InventoryError> {
    match action {
        StockAction::CheckStock => Ok(*stock),
        StockAction::Decrement(0) | StockAction::Restore(0) => Err(InventoryError::InvalidQuantity(0)),
        StockAction::Decrement(quantity) => {
            if *stock < quantity {
                return Err(InventoryError::OutOfStock {
                    name: name.to_string(),
                    requested: quantity,
                    available: *stock,
                });
            }
            *stock -= quantity;
            Ok(*stock)
        }
        StockAction::Restore(quantity) => {
            *stock = stock
                .checked_add(quantity)
                .ok_or(InventoryError::InvalidQuantity(quantity))?;
            Ok(*stock)
        }
    }
}
