//! Browser-target tests for the durable storage backends.
//!
//! These need real `window` APIs; run with
//! `wasm-pack test --headless --chrome`.

use wasm_bindgen_test::*;

use wellspring_core::ports::StoragePort;
use wellspring_platform::storage::{IndexedDbStorage, LocalStorage};

wasm_bindgen_test_configure!(run_in_browser);

// ─── IndexedDB ───────────────────────────────────────────

#[wasm_bindgen_test]
async fn indexeddb_set_commits_before_returning() {
    let storage = IndexedDbStorage::open().await.unwrap();
    storage.set("snapshot:test-commit", b"payload").await.unwrap();

    // set awaited its request, so a second connection already sees
    // the value
    let reopened = IndexedDbStorage::open().await.unwrap();
    let value = reopened.get("snapshot:test-commit").await.unwrap();
    assert_eq!(value, Some(b"payload".to_vec()));

    storage.delete("snapshot:test-commit").await.unwrap();
    let value = storage.get("snapshot:test-commit").await.unwrap();
    assert!(value.is_none());
}

#[wasm_bindgen_test]
async fn indexeddb_overwrite() {
    let storage = IndexedDbStorage::open().await.unwrap();
    storage.set("snapshot:test-overwrite", b"v1").await.unwrap();
    storage.set("snapshot:test-overwrite", b"v2").await.unwrap();

    let value = storage.get("snapshot:test-overwrite").await.unwrap();
    assert_eq!(value, Some(b"v2".to_vec()));

    storage.delete("snapshot:test-overwrite").await.unwrap();
}

#[wasm_bindgen_test]
async fn indexeddb_get_missing() {
    let storage = IndexedDbStorage::open().await.unwrap();
    let value = storage.get("snapshot:never-written").await.unwrap();
    assert!(value.is_none());
}

// ─── localStorage ────────────────────────────────────────

#[wasm_bindgen_test]
async fn localstorage_roundtrip() {
    let storage = LocalStorage::open().unwrap();
    storage.set("snapshot:test-local", b"{}").await.unwrap();
    let value = storage.get("snapshot:test-local").await.unwrap();
    assert_eq!(value, Some(b"{}".to_vec()));

    storage.delete("snapshot:test-local").await.unwrap();
    let value = storage.get("snapshot:test-local").await.unwrap();
    assert!(value.is_none());
}
