//! Generated sample data for guest/demo builds.
//!
//! Thirty days of calendar history ending today, with a handful of journal
//! entries and tasks so the dashboard has something to show before the
//! user writes anything.

use chrono::{Days, NaiveDate};

use crate::model::{CalendarDay, JournalEntry, Mood, NewJournalEntry, Task};

struct JournalSeed {
    days_ago: u64,
    mood: Mood,
    title: &'static str,
    content: &'static str,
}

const JOURNAL_SEEDS: &[JournalSeed] = &[
    JournalSeed {
        days_ago: 1,
        mood: Mood::Good,
        title: "A productive day",
        content: "Felt really focused today and managed to get a lot done. \
            The new morning ritual seems to be working wonders. I feel \
            optimistic about the week ahead.",
    },
    JournalSeed {
        days_ago: 3,
        mood: Mood::Bad,
        title: "Feeling overwhelmed",
        content: "Work has been piling up and I feel like I'm drowning. It's \
            hard to stay positive when there's so much to do. I need to find \
            a way to de-stress.",
    },
    JournalSeed {
        days_ago: 5,
        mood: Mood::Great,
        title: "Wonderful evening with friends",
        content: "Had a great time catching up with old friends. It was so \
            refreshing to laugh and just be in the moment. Exactly what I \
            needed.",
    },
];

/// Generate 30 days of sample calendar data, newest first.
pub fn demo_calendar(today: NaiveDate) -> Vec<CalendarDay> {
    let mut data = Vec::with_capacity(30);

    for i in 0u64..30 {
        let date = today - Days::new(i);

        let journal_entry = JOURNAL_SEEDS.iter().find(|s| s.days_ago == i).map(|s| {
            JournalEntry::new(NewJournalEntry {
                date,
                title: s.title.to_string(),
                content: s.content.to_string(),
                mood: s.mood,
            })
        });

        let tasks = if i == 0 {
            vec![
                Task::new("Morning meditation ritual", true),
                Task::new("Journal about today's feelings", false),
                Task::new("Go for a 30-minute walk", false),
            ]
        } else if i % 3 == 0 {
            vec![
                Task::new("Reflect on gratitude", true),
                Task::new("Plan tomorrow's priorities", true),
            ]
        } else {
            Vec::new()
        };

        data.push(CalendarDay {
            date,
            mood: journal_entry.as_ref().map(|e| e.mood),
            journal_entry,
            tasks,
        });
    }

    data
}
