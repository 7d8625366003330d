use crate::domain::model::{Cart, ProductDetails, ProductId, StockInfo};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable key-value store (browser `localStorage` equivalent).
pub trait KeyValueStore: Send + Sync {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn storage_key(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
    fn locale(&self) -> &str;
}

#[async_trait]
pub trait StockChecker: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo>;
}

#[async_trait]
pub trait ProductFetcher: Send + Sync {
    async fn get_product(&self, product_id: ProductId) -> Result<ProductDetails>;
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Option<Cart>>;
    async fn save(&self, cart: &Cart) -> Result<()>;
}

/// Receives human-readable failure messages for display.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}
