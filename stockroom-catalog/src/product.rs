use serde::{Deserialize, Serialize};

/// Stock assigned to every product fetched from the remote catalog.
pub const DEFAULT_STOCK: u32 = 10;

/// Product record as served by the remote catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteProduct {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub price: f64,
}

impl RemoteProduct {
    /// Convert into a local product with `stock` units available
    pub fn into_product(self, stock: u32) -> Product {
        Product {
            id: self.id.to_string(),
            name: self.title,
            image: self.image,
            price: self.price,
            quantity: stock,
        }
    }
}

/// Core product structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    /// Units still available locally. Decremented as items go into a cart.
    pub quantity: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            price,
            quantity,
        }
    }

    /// Name as shown in the product picker
    pub fn label(&self) -> String {
        crate::search::display_label(&self.name)
    }
}
