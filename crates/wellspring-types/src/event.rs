use serde::{Deserialize, Serialize};

/// Events emitted by the state store.
/// UI drains these from the event bus for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StoreEvent {
    /// A snapshot was loaded (or defaulted) for the active identity
    SnapshotLoaded { key: String },

    /// A debounced save reached storage
    SnapshotSaved { key: String },

    /// A save failed; the next mutation's debounce cycle retries
    SaveFailed { message: String },

    /// The coach replied; `tasks_added` counts auto-added tasks
    CoachReplied { tasks_added: usize },

    /// The coach call failed and a fallback message was substituted
    CoachUnavailable { message: String },
}
