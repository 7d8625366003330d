use crate::domain::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Requested amount {requested} of product {product_id} exceeds stock ({available})")]
    OutOfStock {
        product_id: ProductId,
        requested: u64,
        available: u64,
    },

    #[error("Product {product_id} is not in the cart")]
    ProductNotInCart { product_id: ProductId },

    #[error("Product {product_id} was not found by the catalog API")]
    ProductNotFound { product_id: ProductId },

    #[error("API returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Failure kind exposed to presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    OutOfStock,
    NotFound,
    Network,
    Persistence,
    Configuration,
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::OutOfStock { .. } => ErrorCategory::OutOfStock,
            CartError::ProductNotInCart { .. } | CartError::ProductNotFound { .. } => {
                ErrorCategory::NotFound
            }
            CartError::HttpStatus { .. } | CartError::ApiError(_) => ErrorCategory::Network,
            CartError::IoError(_) | CartError::SerializationError(_) => ErrorCategory::Persistence,
            CartError::ConfigError { .. }
            | CartError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.category() == ErrorCategory::OutOfStock
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::OutOfStock {
                product_id,
                available,
                ..
            } => format!(
                "Only {} unit(s) of product {} are available",
                available, product_id
            ),
            CartError::ProductNotInCart { product_id } => {
                format!("Product {} is not in your cart", product_id)
            }
            CartError::ProductNotFound { product_id } => {
                format!("Product {} does not exist", product_id)
            }
            CartError::HttpStatus { .. } | CartError::ApiError(_) => {
                "Could not reach the store API".to_string()
            }
            CartError::IoError(_) | CartError::SerializationError(_) => {
                "Could not save the cart to local storage".to_string()
            }
            CartError::ConfigError { .. }
            | CartError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::OutOfStock => "Lower the requested amount",
            ErrorCategory::NotFound => "Check the product id",
            ErrorCategory::Network => "Check that the API endpoint is running and reachable",
            ErrorCategory::Persistence => "Check free disk space and storage path permissions",
            ErrorCategory::Configuration => "Fix the configuration value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
