pub mod toml_config;

use crate::core::messages::SUPPORTED_LOCALES;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_range, validate_url,
};

#[cfg(feature = "cli")]
use crate::{adapters::CART_STORAGE_KEY, core::ProductId, utils::validation::Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "./.rocket-cart";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Checks shared by every configuration source.
pub fn validate_settings<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("api_endpoint", config.api_endpoint())?;
    validate_path("storage_path", config.storage_path())?;
    validate_non_empty_string("storage_key", config.storage_key())?;
    validate_range(
        "request_timeout_seconds",
        config.request_timeout_seconds(),
        1,
        300,
    )?;
    validate_one_of("locale", config.locale(), SUPPORTED_LOCALES)?;
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Shopping cart kept in local storage and checked against a stock API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = DEFAULT_STORAGE_PATH)]
    pub storage_path: String,

    #[arg(long, default_value = CART_STORAGE_KEY)]
    pub storage_key: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub request_timeout_seconds: u64,

    #[arg(long, default_value = DEFAULT_LOCALE, help = "Notification language (pt-BR, en)")]
    pub locale: String,

    #[arg(short, long, help = "TOML configuration file; replaces the connection flags")]
    pub config: Option<String>,

    #[arg(long, help = "Emit JSON logs and route notifications to the log")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum CartCommand {
    /// Print the current cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product line
    Remove { product_id: ProductId },
    /// Set the amount of a product line
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
