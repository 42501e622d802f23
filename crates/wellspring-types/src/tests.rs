#[cfg(test)]
mod tests {
    use crate::demo::demo_calendar;
    use crate::identity::Identity;
    use crate::message::*;
    use crate::model::*;
    use crate::snapshot::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ─── Mood Tests ──────────────────────────────────────────

    #[test]
    fn test_mood_wire_values() {
        assert_eq!(serde_json::to_string(&Mood::Great).unwrap(), "\"great\"");
        assert_eq!(serde_json::to_string(&Mood::Okay).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&Mood::Awful).unwrap(), "\"awful\"");

        let parsed: Mood = serde_json::from_str("\"ok\"").unwrap();
        assert_eq!(parsed, Mood::Okay);
    }

    #[test]
    fn test_mood_emoji() {
        assert_eq!(Mood::Great.emoji(), "😄");
        assert_eq!(Mood::Awful.emoji(), "😭");
    }

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.image.is_none());
        assert!(msg.suggestions.is_none());
    }

    #[test]
    fn test_message_user_with_image() {
        let msg = Message::user_with_image("look", "data:image/png;base64,AAAA");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_message_assistant_with_suggestions() {
        let msg = Message::assistant_with_suggestions(
            "Try these",
            vec!["Stretch".to_string(), "Hydrate".to_string()],
        );
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.suggestions.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_message_ids_are_unique() {
        assert_ne!(Message::user("a").id, Message::user("a").id);
    }

    #[test]
    fn test_message_serialization_skips_empty_optionals() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert!(!json.contains("image"));
        assert!(!json.contains("suggestions"));
    }

    // ─── Model Tests ─────────────────────────────────────────

    #[test]
    fn test_journal_entry_new_assigns_id() {
        let entry = JournalEntry::new(NewJournalEntry {
            date: date(2024, 6, 1),
            title: "Title".to_string(),
            content: "Body".to_string(),
            mood: Mood::Good,
        });
        assert!(!entry.id.is_empty());
        assert_eq!(entry.mood, Mood::Good);
    }

    #[test]
    fn test_calendar_day_date_roundtrips_at_day_precision() {
        let day = CalendarDay::empty(date(2024, 6, 1));
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"2024-06-01\""));

        let back: CalendarDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date, date(2024, 6, 1));
    }

    #[test]
    fn test_user_profile_camel_case_wire_format() {
        let mut profile = UserProfile::named("Alex Doe");
        profile.preferred_activities.push("walking".to_string());
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("preferredActivities"));

        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.preferred_activities, vec!["walking".to_string()]);
    }

    // ─── Snapshot Tests ──────────────────────────────────────

    #[test]
    fn test_initial_snapshot_production_is_empty() {
        let snapshot = Snapshot::initial("Friend", date(2024, 6, 1), false);
        assert!(snapshot.calendar.is_empty());
        assert_eq!(snapshot.messages.len(), 1);
        assert_eq!(snapshot.messages[0].role, Role::Assistant);
        assert_eq!(snapshot.messages[0].content, WELCOME_MESSAGE);
        assert!(snapshot.messages[0]
            .content
            .starts_with("Hello! I'm your AI wellness coach."));
        assert_eq!(snapshot.profile.as_ref().unwrap().name, "Friend");
    }

    #[test]
    fn test_initial_snapshot_demo_is_seeded() {
        let snapshot = Snapshot::initial("Alex Doe", date(2024, 6, 1), true);
        assert_eq!(snapshot.calendar.len(), 30);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let mut snapshot = Snapshot::initial("Friend", date(2024, 6, 1), true);
        snapshot.messages.push(Message::user("hello"));

        let bytes = serde_json::to_vec(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(back.calendar.len(), snapshot.calendar.len());
        assert_eq!(back.messages.len(), snapshot.messages.len());
        for (a, b) in snapshot.calendar.iter().zip(back.calendar.iter()) {
            assert_eq!(a.date, b.date);
        }
    }

    // ─── Demo Data Tests ─────────────────────────────────────

    #[test]
    fn test_demo_calendar_shape() {
        let today = date(2024, 6, 30);
        let data = demo_calendar(today);

        assert_eq!(data.len(), 30);
        assert_eq!(data[0].date, today);

        // Newest first, one day per date
        for pair in data.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
    }

    #[test]
    fn test_demo_calendar_mood_matches_journal() {
        let data = demo_calendar(date(2024, 6, 30));
        let with_journal: Vec<_> = data
            .iter()
            .filter(|d| d.journal_entry.is_some())
            .collect();
        assert_eq!(with_journal.len(), 3);
        for day in with_journal {
            assert_eq!(day.mood, day.journal_entry.as_ref().map(|e| e.mood));
        }
    }

    #[test]
    fn test_demo_calendar_today_has_tasks() {
        let data = demo_calendar(date(2024, 6, 30));
        assert_eq!(data[0].tasks.len(), 3);
        assert!(data[0].tasks[0].completed);
    }

    // ─── Identity Tests ──────────────────────────────────────

    #[test]
    fn test_identity_storage_keys() {
        assert_eq!(Identity::Guest.storage_key(), "snapshot:guest");
        let user = Identity::User {
            id: "u-42".to_string(),
            display_name: Some("Sam".to_string()),
        };
        assert_eq!(user.storage_key(), "snapshot:u-42");
        assert_eq!(user.user_id(), "u-42");
        assert_eq!(user.display_name(), Some("Sam"));
        assert!(!user.is_guest());
        assert_eq!(Identity::Guest.user_id(), "guest");
    }
}
