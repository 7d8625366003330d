use crate::core::{Cart, CartRepository, KeyValueStore, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// File-backed key-value store: one `<key>.json` file per key under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Path::new(&self.base_path).join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for LocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.path_for(key);
        match tokio::fs::read_to_string(&full_path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let full_path = self.path_for(key);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write then rename so a crash never leaves a half-written cart.
        let tmp_path = full_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, value).await?;
        tokio::fs::rename(&tmp_path, &full_path).await?;
        Ok(())
    }
}

/// Process-local key-value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores the whole cart as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct KeyValueCartRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueCartRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: KeyValueStore> CartRepository for KeyValueCartRepository<S> {
    async fn load(&self) -> Result<Option<Cart>> {
        let Some(raw) = self.store.get_item(&self.key).await? else {
            tracing::debug!("No stored cart under '{}'", self.key);
            return Ok(None);
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => Ok(Some(cart)),
            Err(e) => {
                // An unreadable cart must not keep the application from starting.
                tracing::warn!("Ignoring unreadable cart under '{}': {}", self.key, e);
                Ok(None)
            }
        }
    }

    async fn save(&self, cart: &Cart) -> Result<()> {
        let data = serde_json::to_string(cart)?;
        tracing::debug!("Writing cart ({} bytes) under '{}'", data.len(), self.key);
        self.store.set_item(&self.key, &data).await
    }
}
