//! `window.localStorage` backend.
//! The guest-scope store: persistent per browser profile, no network
//! identity required. Values are stored as UTF-8 strings, which suits
//! the JSON snapshots the state store writes.

use async_trait::async_trait;
use wellspring_core::ports::StoragePort;
use wellspring_types::{AppError, Result};

pub struct LocalStorage {
    store: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("no window object".to_string()))?;
        let store = window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage not available".to_string()))?;
        Ok(Self { store })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .store
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        self.store
            .set_item(key, text)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
