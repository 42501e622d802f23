use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mood recorded for a calendar day or journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Awful,
    Bad,
    #[serde(rename = "ok")]
    Okay,
    Good,
    Great,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "😊",
            Mood::Okay => "😐",
            Mood::Bad => "😟",
            Mood::Awful => "😭",
        }
    }
}

/// A journal entry written for one day. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub mood: Mood,
}

/// Input record for creating a journal entry — the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub mood: Mood,
}

impl JournalEntry {
    pub fn new(entry: NewJournalEntry) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: entry.date,
            title: entry.title,
            content: entry.content,
            mood: entry.mood,
        }
    }
}

/// A task on the calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub completed: bool,
}

impl Task {
    pub fn new(content: impl Into<String>, completed: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            completed,
        }
    }
}

/// A task description that has not been materialized yet.
/// Also the element type of the coach response's task list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub content: String,
    pub completed: bool,
}

/// One day of calendar state. At most one per distinct date in a snapshot.
///
/// When a journal entry is present, `mood` mirrors the entry's mood — the
/// entry is the authority whenever both exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_entry: Option<JournalEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tasks: Vec<Task>,
}

impl CalendarDay {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            journal_entry: None,
            tasks: Vec::new(),
        }
    }
}

/// The user's profile. Replaced wholesale on update — callers merge first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub preferred_activities: Vec<String>,
}

impl UserProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pronouns: None,
            goals: Vec::new(),
            preferred_activities: Vec::new(),
        }
    }
}
