use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use reverie_model::journal::JournalEntry;
use uuid::Uuid;

/// Fixed point in time all fixtures are relative to.
#[must_use]
pub fn epoch() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
        .fixed_offset()
}

/// An entry created `minutes` after [`epoch`].
#[must_use]
pub fn entry(user_id: Uuid, minutes: i64, content: &str) -> JournalEntry {
    let created_at = epoch() + Duration::minutes(minutes);
    JournalEntry {
        id: Uuid::new_v4(),
        user_id,
        title: None,
        content: content.to_owned(),
        mood: None,
        summary: None,
        created_at,
        updated_at: created_at,
    }
}

pub trait EntryFixtureExt {
    #[must_use]
    fn with_title(self, title: &str) -> Self;
    #[must_use]
    fn with_mood(self, mood: &str) -> Self;
    #[must_use]
    fn with_summary(self, summary: &str) -> Self;
}

impl EntryFixtureExt for JournalEntry {
    fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    fn with_mood(mut self, mood: &str) -> Self {
        self.mood = Some(mood.to_owned());
        self
    }

    fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_owned());
        self
    }
}
