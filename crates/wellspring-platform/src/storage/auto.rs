//! Storage backend selection.
//!
//! Auto-detection priority: IndexedDB → localStorage → memory. The
//! memory fallback means opening storage never fails; at worst the
//! session is not durable, which the store already tolerates.

use std::rc::Rc;
use wellspring_core::ports::StoragePort;
use wellspring_types::config::{StorageBackendType, StorageConfig};

use super::{IndexedDbStorage, LocalStorage, MemoryStorage};

/// Open the backend named by the config, falling back to auto-detection
/// when the requested one is unavailable.
pub async fn open_storage(config: &StorageConfig) -> Rc<dyn StoragePort> {
    match config.backend {
        StorageBackendType::Auto => auto_detect_storage().await,
        StorageBackendType::Memory => Rc::new(MemoryStorage::new()),
        StorageBackendType::LocalStorage => match LocalStorage::open() {
            Ok(local) => Rc::new(local),
            Err(e) => {
                log::warn!("localStorage unavailable ({}), auto-detecting", e);
                auto_detect_storage().await
            }
        },
        StorageBackendType::IndexedDb => match IndexedDbStorage::open().await {
            Ok(idb) => Rc::new(idb),
            Err(e) => {
                log::warn!("IndexedDB unavailable ({}), auto-detecting", e);
                auto_detect_storage().await
            }
        },
    }
}

/// Pick the best available storage backend.
/// Returns a trait object so callers are backend-agnostic.
pub async fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match IndexedDbStorage::open().await {
        Ok(idb) => {
            log::info!("Storage backend: IndexedDB");
            return Rc::new(idb);
        }
        Err(e) => log::warn!("IndexedDB unavailable ({}), trying localStorage", e),
    }

    match LocalStorage::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
