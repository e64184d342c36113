use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use agora_core::{Product, ProductDraft, ProductId, ProductPatch};
use agora_ports::{CatalogApi, CatalogError, CatalogResult};

use crate::config::GatewayConfig;
use crate::error::RestError;

/// REST client for the remote catalog service
/// Infrastructure component - handles HTTP communication
#[derive(Clone)]
pub struct RestCatalogClient {
    client: Client,
    base_url: String,
}

impl RestCatalogClient {
    pub fn new(config: GatewayConfig) -> Self {
        RestCatalogClient {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(GatewayConfig::new(base_url))
    }

    /// Fetch the full product collection
    pub async fn list(&self) -> Result<Vec<Product>, RestError> {
        self.get("/products").await
    }

    /// Fetch the products of one category
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, RestError> {
        let path = format!("/products/category/{}", category);
        self.get(&path).await
    }

    /// Create a product; the response carries the server-assigned id
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, RestError> {
        self.post("/products", draft).await
    }

    /// Apply a partial update to an existing product
    pub async fn update(&self, id: ProductId, patch: &ProductPatch) -> Result<Product, RestError> {
        let path = format!("/products/{}", id);
        self.put(&path, patch).await
    }

    /// Delete a product; the response body, if any, is discarded
    pub async fn remove(&self, id: ProductId) -> Result<(), RestError> {
        let url = format!("{}/products/{}", self.base_url, id);
        debug!("DELETE {}", url);
        let resp = self.client.delete(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RestError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;

        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, RestError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("PUT {}", url);
        let resp = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, RestError> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| RestError::Decode(e.to_string()))
    }
}

/// Implement the CatalogApi port for RestCatalogClient (Dependency Inversion)
///
/// Converts infrastructure RestError to domain CatalogError to maintain
/// proper dependency direction (infrastructure -> domain).
#[async_trait]
impl CatalogApi for RestCatalogClient {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        RestCatalogClient::list(self).await.map_err(CatalogError::from)
    }

    async fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        RestCatalogClient::list_by_category(self, category)
            .await
            .map_err(CatalogError::from)
    }

    async fn create(&self, draft: &ProductDraft) -> CatalogResult<Product> {
        RestCatalogClient::create(self, draft)
            .await
            .map_err(CatalogError::from)
    }

    async fn update(&self, id: ProductId, patch: &ProductPatch) -> CatalogResult<Product> {
        RestCatalogClient::update(self, id, patch)
            .await
            .map_err(CatalogError::from)
    }

    async fn remove(&self, id: ProductId) -> CatalogResult<()> {
        RestCatalogClient::remove(self, id)
            .await
            .map_err(CatalogError::from)
    }
}
