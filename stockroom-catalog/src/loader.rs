use async_trait::async_trait;
use tracing::{error, info};

use crate::inventory::Catalog;
use crate::product::{RemoteProduct, DEFAULT_STOCK};

/// Anything that can hand back the remote product list
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<RemoteProduct>, CatalogError>;
}

/// Catalog fetch errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog responded with status {0}")]
    Status(u16),

    #[error("Catalog payload could not be decoded: {0}")]
    Decode(String),
}

/// One-shot loader. No retry: a failed fetch resolves to an empty catalog.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    default_stock: u32,
}

impl CatalogLoader {
    pub fn new(default_stock: u32) -> Self {
        Self { default_stock }
    }

    pub async fn load(&self, source: &dyn CatalogSource) -> Catalog {
        match source.fetch_products().await {
            Ok(records) => {
                let products: Vec<_> = records
                    .into_iter()
                    .map(|r| r.into_product(self.default_stock))
                    .collect();
                info!(count = products.len(), stock = self.default_stock, "Catalog loaded");
                Catalog::ready(products)
            }
            Err(e) => {
                error!(error = %e, "Error fetching products");
                Catalog::failed(e.to_string())
            }
        }
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_STOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::CatalogStatus;

    struct FixedSource(Result<Vec<RemoteProduct>, CatalogError>);

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn fetch_products(&self) -> Result<Vec<RemoteProduct>, CatalogError> {
            self.0.clone()
        }
    }

    fn record(id: u64, title: &str, price: f64) -> RemoteProduct {
        RemoteProduct {
            id,
            title: title.to_string(),
            image: format!("https://img/{}.jpg", id),
            price,
        }
    }

    #[tokio::test]
    async fn test_load_assigns_default_stock() {
        let source = FixedSource(Ok(vec![record(1, "Backpack", 109.95), record(2, "T-Shirt", 22.3)]));

        let catalog = CatalogLoader::default().load(&source).await;

        assert_eq!(catalog.status(), &CatalogStatus::Ready);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.products().iter().all(|p| p.quantity == DEFAULT_STOCK));
        assert_eq!(catalog.get("2").unwrap().name, "T-Shirt");
    }

    #[tokio::test]
    async fn test_load_with_custom_stock() {
        let source = FixedSource(Ok(vec![record(5, "Ring", 9.99)]));
        let catalog = CatalogLoader::new(3).load(&source).await;
        assert_eq!(catalog.get("5").unwrap().quantity, 3);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_catalog_empty() {
        let source = FixedSource(Err(CatalogError::Status(503)));

        let catalog = CatalogLoader::default().load(&source).await;

        assert!(catalog.is_empty());
        assert_eq!(
            catalog.status(),
            &CatalogStatus::Failed("Catalog responded with status 503".to_string())
        );
        assert!(catalog.status().is_resolved());
    }
}
