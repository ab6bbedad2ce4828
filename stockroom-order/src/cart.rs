use stockroom_catalog::Catalog;
use tracing::info;

use crate::models::{CartItem, RequisitionError};

/// Lines of the active requisition, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product, taking them out of catalog stock.
    ///
    /// A product already in the cart has its line quantity increased instead
    /// of gaining a second line. On error neither cart nor stock changes.
    pub fn add(
        &mut self,
        catalog: &mut Catalog,
        product_id: &str,
        quantity: u32,
    ) -> Result<&CartItem, RequisitionError> {
        if quantity == 0 {
            return Err(RequisitionError::InvalidQuantity(quantity));
        }

        let product = catalog.reserve(product_id, quantity)?;
        let remaining = product.quantity;

        let index = match self.items.iter().position(|item| item.id == product_id) {
            Some(index) => {
                self.items[index].order_quantity += quantity;
                index
            }
            None => {
                self.items.push(CartItem::new(product, quantity));
                self.items.len() - 1
            }
        };

        let line = &self.items[index];
        info!(
            product_id = %line.id,
            added = quantity,
            line_quantity = line.order_quantity,
            remaining,
            "Added to cart"
        );
        Ok(line)
    }

    /// Drop every line. Reserved stock is not returned to the catalog.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_catalog::Product;

    fn catalog() -> Catalog {
        Catalog::ready(vec![
            Product::new("1", "Ring", "https://img/1.jpg", 9.99, 10),
            Product::new("2", "Jacket", "https://img/2.jpg", 55.99, 2),
        ])
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_add_merge_and_reject() {
        let mut catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&mut catalog, "1", 3).unwrap();
        assert_eq!(catalog.get("1").unwrap().quantity, 7);
        assert_eq!(cart.get("1").unwrap().order_quantity, 3);
        assert_close(cart.total(), 29.97);

        cart.add(&mut catalog, "1", 3).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("1").unwrap().order_quantity, 6);
        assert_eq!(catalog.get("1").unwrap().quantity, 4);
        assert_close(cart.total(), 59.94);

        let err = cart.add(&mut catalog, "1", 5).unwrap_err();
        assert_eq!(err, RequisitionError::InsufficientStock { requested: 5, available: 4 });
        assert_eq!(cart.get("1").unwrap().order_quantity, 6);
        assert_eq!(catalog.get("1").unwrap().quantity, 4);
        assert_close(cart.total(), 59.94);
    }

    #[test]
    fn test_total_spans_lines() {
        let mut catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&mut catalog, "1", 2).unwrap();
        cart.add(&mut catalog, "2", 2).unwrap();

        let expected: f64 = cart.items().iter().map(|i| i.price * i.order_quantity as f64).sum();
        assert_close(cart.total(), expected);
        assert_close(cart.total(), 9.99 * 2.0 + 55.99 * 2.0);
        assert_eq!(cart.items()[1].id, "2");
    }

    #[test]
    fn test_rejects_zero_and_unknown() {
        let mut catalog = catalog();
        let mut cart = Cart::new();

        assert_eq!(
            cart.add(&mut catalog, "1", 0).unwrap_err(),
            RequisitionError::InvalidQuantity(0)
        );
        assert_eq!(
            cart.add(&mut catalog, "42", 1).unwrap_err(),
            RequisitionError::ProductNotFound("42".to_string())
        );
        assert!(cart.is_empty());
        assert_eq!(catalog.get("1").unwrap().quantity, 10);
    }

    #[test]
    fn test_clear_keeps_stock_reserved() {
        let mut catalog = catalog();
        let mut cart = Cart::new();

        cart.add(&mut catalog, "2", 2).unwrap();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(catalog.get("2").unwrap().quantity, 0);
    }
}
