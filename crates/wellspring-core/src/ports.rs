//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `wellspring-core` (pure Rust).
//! Implementations live in `wellspring-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wellspring_types::model::{Mood, TaskDraft};
use wellspring_types::Result;

// ─── Storage Port ────────────────────────────────────────────

/// Key-value persistence. One snapshot per identity key; the store
/// serializes and addresses it — backends never look inside the bytes.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Coach Port ──────────────────────────────────────────────

/// Request sent to the hosted coach flow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachRequest {
    pub user_id: String,
    pub user_name: String,
    pub user_message: String,
    pub preferred_activities: Vec<String>,
    /// Serialized array of [`CalendarContextEntry`] — at most the seven
    /// most recent days, titles only, never full journal bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_context: Option<String>,
    /// Optional image attachment as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response from the coach flow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_to_add: Option<Vec<TaskDraft>>,
}

/// One calendar day projected for the coach prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarContextEntry {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,
}

/// Opaque remote call to the coach flow. At most one attempt per user
/// message — retrying is a UI-level "send again" action.
#[async_trait(?Send)]
pub trait CoachPort {
    async fn converse(&self, req: CoachRequest) -> Result<CoachResponse>;
}
