use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::demo::demo_calendar;
use crate::message::Message;
use crate::model::{CalendarDay, UserProfile};

/// Greeting shown to every fresh snapshot's transcript
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI wellness coach. How are you \
feeling today? Feel free to share what's on your mind, or upload an image that \
represents your current state.";

/// The complete owned state for one identity: calendar days, chat
/// transcript, and profile. The state store owns the in-memory copy;
/// the persistence adapter owns the durable one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub calendar: Vec<CalendarDay>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

impl Snapshot {
    /// Build the snapshot a brand-new identity starts from.
    pub fn initial(profile_name: &str, today: NaiveDate, seed_demo: bool) -> Self {
        Self {
            calendar: if seed_demo {
                demo_calendar(today)
            } else {
                Vec::new()
            },
            messages: vec![Message::assistant(WELCOME_MESSAGE)],
            profile: Some(UserProfile::named(profile_name)),
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.calendar.iter().find(|d| d.date == date)
    }
}
