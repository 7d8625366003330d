pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CartCommand, CliConfig};

pub use adapters::{
    ConsoleNotifier, HttpCatalog, KeyValueCartRepository, LocalStorage, MemoryStorage,
    TracingNotifier,
};
pub use config::toml_config::TomlConfig;
pub use crate::core::{cart_store::CartStore, Cart, Product, UpdateProductAmount};
pub use utils::error::{CartError, ErrorCategory, Result};
