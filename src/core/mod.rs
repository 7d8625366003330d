pub mod cart_store;
pub mod messages;

pub use crate::domain::model::{
    Cart, Product, ProductDetails, ProductId, StockInfo, UpdateProductAmount,
};
pub use crate::domain::ports::{
    CartRepository, ConfigProvider, KeyValueStore, Notifier, ProductFetcher, StockChecker,
};
pub use crate::utils::error::Result;
