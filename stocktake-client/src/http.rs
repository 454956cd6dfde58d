//! HTTP transport for the inventory backend

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{Product, ProductUpdate};

/// Remote operations the adjustment ledger depends on.
///
/// Implemented over HTTP for real deployments; tests supply in-memory
/// fakes so the ledger can be exercised without a network.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Fetch the full catalog. `GET /inventory`.
    async fn fetch_inventory(&self) -> ClientResult<Vec<Product>>;

    /// Apply a partial update to one product, addressed by sku, and return
    /// the authoritative post-update record. `PUT /product/{sku}`.
    async fn update_stock(&self, sku: &str, update: &ProductUpdate) -> ClientResult<Product>;
}

/// Network HTTP client for the inventory backend
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: Client,
    base_url: String,
}

impl HttpInventoryClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "backend returned non-success status");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    async fn fetch_inventory(&self) -> ClientResult<Vec<Product>> {
        let url = format!("{}/inventory", self.base_url);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn update_stock(&self, sku: &str, update: &ProductUpdate) -> ClientResult<Product> {
        let url = format!("{}/product/{}", self.base_url, sku);
        let response = self.client.put(&url).json(update).send().await?;
        self.handle_response(response).await
    }
}
