//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{apply_stock, StockAction};
use crate::framework::ActorEntity;
use crate::inventory::InventoryError;
use crate::model::{Product, ProductCreate, ProductId};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Checks the fields shared by every catalog entry.
pub(crate) fn validate_entry(name: &str, restaurant: &str, price: Decimal) -> Result<(), InventoryError> {
    if name.trim().is_empty() {
        return Err(InventoryError::ValidationError("name must not be empty".into()));
    }
    if restaurant.trim().is_empty() {
        return Err(InventoryError::ValidationError(format!("{name}: restaurant must not be empty")));
    }
    if price.is_sign_negative() {
        return Err(InventoryError::ValidationError(format!("{name}: negative price {price}")));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ();
    type Action = StockAction;
    type ActionResult = u32;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        validate_entry(&params.name, &params.restaurant, params.price)?;
        Ok(Self::new(id, params.name, params.restaurant, params.price, params.stock))
    }

    /// Catalog entries are immutable apart from stock, which only moves through
    /// [`StockAction`].
    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: StockAction, _ctx: &()) -> Result<u32, Self::Error> {
        apply_stock(&mut self.stock, &self.name, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ResourceActor;

    fn burger() -> ProductCreate {
        ProductCreate {
            name: "Burger".into(),
            restaurant: "Casa Pepe".into(),
            price: Decimal::new(550, 2),
            stock: 1,
        }
    }

    #[test]
    fn test_create_validation() {
        assert!(Product::from_create_params(ProductId(1), burger()).is_ok());

        let nameless = ProductCreate { name: "".into(), ..burger() };
        assert!(matches!(
            Product::from_create_params(ProductId(1), nameless),
            Err(InventoryError::ValidationError(_))
        ));

        let negative = ProductCreate { price: Decimal::new(-1, 0), ..burger() };
        assert!(matches!(
            Product::from_create_params(ProductId(1), negative),
            Err(InventoryError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_last_unit_then_out_of_stock() {
        let mut product = Product::from_create_params(ProductId(1), burger()).unwrap();
        assert_eq!(product.handle_action(StockAction::Decrement(1), &()).await, Ok(0));
        let err = product.handle_action(StockAction::Decrement(1), &()).await.unwrap_err();
        assert!(matches!(err, InventoryError::OutOfStock { ref name, .. } if name == "Burger"));
    }

    #[tokio::test]
    async fn test_stock_moves_only_through_actions() {
        let (actor, client) = ResourceActor::<Product>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(burger()).await.unwrap();
        let untouched = client.update(id, ()).await.unwrap();
        assert_eq!(untouched.price, Decimal::new(550, 2));
        assert_eq!(untouched.stock, 1);

        assert_eq!(client.perform_action(id, StockAction::Restore(2)).await.unwrap(), 3);
        assert_eq!(client.get(id).await.unwrap().map(|p| p.stock), Some(3));
    }
}
