//! WASM-target tests for wellspring-platform (Node.js runtime).
//!
//! Tests MemoryStorage under wasm32-unknown-unknown via
//! `wasm-pack test --node`.
//!
//! localStorage and IndexedDB need a browser; those suites run with
//! `wasm-pack test --headless --chrome`.

use wasm_bindgen_test::*;

use wellspring_core::ports::StoragePort;
use wellspring_platform::storage::MemoryStorage;
use wellspring_types::snapshot::Snapshot;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    let result = storage.get("snapshot:guest").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("snapshot:guest", b"{}").await.unwrap();
    let result = storage.get("snapshot:guest").await.unwrap();
    assert_eq!(result, Some(b"{}".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("snapshot:u-1", b"v1").await.unwrap();
    storage.set("snapshot:u-1", b"v2").await.unwrap();
    let result = storage.get("snapshot:u-1").await.unwrap();
    assert_eq!(result, Some(b"v2".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("snapshot:guest", b"data").await.unwrap();
    storage.delete("snapshot:guest").await.unwrap();
    let result = storage.get("snapshot:guest").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_delete_nonexistent() {
    let storage = MemoryStorage::new();
    storage.delete("snapshot:missing").await.unwrap();
}

// ─── Snapshot persistence through the port ───────────────

#[wasm_bindgen_test]
async fn snapshot_roundtrips_through_storage() {
    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let snapshot = Snapshot::initial("Friend", today, true);

    let storage = MemoryStorage::new();
    let bytes = serde_json::to_vec(&snapshot).unwrap();
    storage.set("snapshot:guest", &bytes).await.unwrap();

    let loaded = storage.get("snapshot:guest").await.unwrap().unwrap();
    let back: Snapshot = serde_json::from_slice(&loaded).unwrap();

    assert_eq!(back.calendar.len(), snapshot.calendar.len());
    for (a, b) in snapshot.calendar.iter().zip(back.calendar.iter()) {
        assert_eq!(a.date, b.date);
    }
}
