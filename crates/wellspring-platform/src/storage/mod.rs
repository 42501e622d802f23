pub mod auto;
pub mod indexeddb;
pub mod local;
pub mod memory;

pub use auto::{auto_detect_storage, open_storage};
pub use indexeddb::IndexedDbStorage;
pub use local::LocalStorage;
pub use memory::MemoryStorage;
