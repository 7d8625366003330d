use crate::adapters::CART_STORAGE_KEY;
use crate::config::{validate_settings, DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub notifications: Option<NotificationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
    pub key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub locale: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn storage_key(&self) -> &str {
        self.storage.key.as_deref().unwrap_or(CART_STORAGE_KEY)
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn locale(&self) -> &str {
        self.notifications
            .as_ref()
            .and_then(|n| n.locale.as_deref())
            .unwrap_or(DEFAULT_LOCALE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config_uses_defaults() {
        let toml_content = r#"
[api]
endpoint = "http://localhost:3333"

[storage]
path = "./cart-data"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_endpoint(), "http://localhost:3333");
        assert_eq!(config.storage_path(), "./cart-data");
        assert_eq!(config.storage_key(), "@RocketShoes:cart");
        assert_eq!(config.request_timeout_seconds(), 10);
        assert_eq!(config.locale(), "pt-BR");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
endpoint = "https://shop.example.com/api"
timeout_seconds = 3

[storage]
path = "/var/lib/cart"
key = "cart:v2"

[notifications]
locale = "en"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.storage_key(), "cart:v2");
        assert_eq!(config.request_timeout_seconds(), 3);
        assert_eq!(config.locale(), "en");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROCKET_CART_TEST_ENDPOINT", "https://stock.example.com");

        let toml_content = r#"
[api]
endpoint = "${ROCKET_CART_TEST_ENDPOINT}"

[storage]
path = "${ROCKET_CART_TEST_UNSET_PATH}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_endpoint(), "https://stock.example.com");
        assert_eq!(config.storage_path(), "${ROCKET_CART_TEST_UNSET_PATH}");

        std::env::remove_var("ROCKET_CART_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[api]
endpoint = "invalid-url"
timeout_seconds = 0

[storage]
path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = TomlConfig::from_toml_str("[api]\nendpoint = \"http://x\"\n").unwrap_err();
        assert!(matches!(err, CartError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
endpoint = "http://localhost:3333"

[storage]
path = "./output"

[notifications]
locale = "pt-BR"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage_path(), "./output");
    }
}
