use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub coach: CoachConfig,
    pub storage: StorageConfig,
    /// Seed a fresh snapshot with generated sample data (guest/demo builds).
    /// Production builds start with an empty calendar.
    pub seed_demo_data: bool,
    pub task_ingestion: TaskIngestion,
    /// Quiet window before a scheduled snapshot save fires
    pub save_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            coach: CoachConfig::default(),
            storage: StorageConfig::default(),
            seed_demo_data: false,
            task_ingestion: TaskIngestion::default(),
            save_debounce_ms: 1000,
        }
    }
}

/// Where the hosted coach flow lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    pub api_base: String,
    pub api_key: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            api_key: String::new(),
        }
    }
}

/// What happens to tasks returned by the coach. One turn never does both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskIngestion {
    /// Returned tasks land on the calendar immediately
    AutoAdd,
    /// Returned tasks are offered on the assistant message for one-click add
    SuggestOnly,
}

impl Default for TaskIngestion {
    fn default() -> Self {
        TaskIngestion::AutoAdd
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    Memory,
    LocalStorage,
    IndexedDb,
}
