use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Where the catalog is in its one-shot load
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", content = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogStatus {
    Loading,
    Ready,
    Failed(String),
}

impl CatalogStatus {
    /// True once the fetch has finished, successfully or not
    pub fn is_resolved(&self) -> bool {
        !matches!(self, CatalogStatus::Loading)
    }
}

/// Local product list with per-product remaining stock.
///
/// Stock lives only in memory; there is no reservation on the remote side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    status: CatalogStatus,
}

impl Catalog {
    pub fn loading() -> Self {
        Self {
            products: Vec::new(),
            status: CatalogStatus::Loading,
        }
    }

    pub fn ready(products: Vec<Product>) -> Self {
        Self {
            products,
            status: CatalogStatus::Ready,
        }
    }

    /// A resolved but empty catalog
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            status: CatalogStatus::Failed(reason.into()),
        }
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Take `quantity` units out of a product's remaining stock
    pub fn reserve(&mut self, product_id: &str, quantity: u32) -> Result<&Product, InventoryError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| InventoryError::NotFound(product_id.to_string()))?;

        if quantity > product.quantity {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: product.quantity,
            });
        }

        product.quantity -= quantity;
        Ok(&*product)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::loading()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        requested: u32,
        available: u32,
    },
}
