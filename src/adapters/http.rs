use crate::core::{ProductDetails, ProductFetcher, ProductId, Result, StockChecker, StockInfo};
use crate::utils::error::CartError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Stock and product lookups against the storefront REST API
/// (`GET {base}/stock/{id}`, `GET {base}/products/{id}`).
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: &str, product_id: ProductId) -> Result<T> {
        let url = format!("{}/{}/{}", self.base_url, resource, product_id);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(CartError::ProductNotFound { product_id });
        }
        if !status.is_success() {
            return Err(CartError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl StockChecker for HttpCatalog {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo> {
        self.get_json("stock", product_id).await
    }
}

#[async_trait]
impl ProductFetcher for HttpCatalog {
    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetails> {
        self.get_json("products", product_id).await
    }
}
