use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use stockroom_catalog::{CatalogError, CatalogSource, RemoteProduct};
use tracing::info;

/// Product catalog served over plain HTTP GET as a JSON array
#[derive(Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_seconds))
                .build()
                .unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<RemoteProduct>, CatalogError> {
        info!(url = %self.url, "Fetching product catalog");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<Vec<RemoteProduct>>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
