use crate::auth::Identity;
use crate::store::EntryStore;
use reverie_model::journal::JournalEntry;
use reverie_model::timeline::{EntryFilter, Timeline, TimelineState};
use std::error::Error;
use std::sync::Arc;
use tracing::instrument;

/// What the timeline shows for a set of loaded entries and a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineView<'a> {
    /// No entries at all.
    Empty,
    /// Entries exist, the filter matches none.
    NoMatches,
    Entries(Vec<&'a JournalEntry>),
}

impl TimelineView<'_> {
    #[must_use]
    pub fn state(&self) -> TimelineState {
        match self {
            TimelineView::Empty => TimelineState::Empty,
            TimelineView::NoMatches => TimelineState::NoMatches,
            TimelineView::Entries(_) => TimelineState::Entries,
        }
    }
}

#[derive(Clone)]
pub struct TimelineQuery {
    store: Arc<dyn EntryStore>,
}

impl TimelineQuery {
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Entries of the caller, newest first. Failures are logged and yield no entries.
    #[instrument(skip_all, fields(user_id = %identity.user_id()))]
    pub async fn list(&self, identity: &Identity) -> Vec<JournalEntry> {
        self.store
            .list(identity)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load journal entries"))
            .unwrap_or_default()
    }

    pub async fn timeline(&self, identity: &Identity, filter: &EntryFilter) -> Timeline {
        build(self.list(identity).await, filter)
    }
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|field| field.to_lowercase().contains(needle))
}

/// Entries matching both the search term and the mood, in input order.
///
/// The search is a case-insensitive substring match on content, title and summary.
/// The mood must match exactly. Empty values match everything.
#[must_use]
pub fn filter<'a>(entries: &'a [JournalEntry], search: &str, mood: &str) -> Vec<&'a JournalEntry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || contains(Some(&entry.content), &needle)
                || contains(entry.title.as_deref(), &needle)
                || contains(entry.summary.as_deref(), &needle)
        })
        .filter(|entry| mood.is_empty() || entry.mood.as_deref() == Some(mood))
        .collect()
}

/// Distinct moods of the loaded entries, in order of first appearance.
#[must_use]
pub fn mood_options(entries: &[JournalEntry]) -> Vec<String> {
    let mut moods: Vec<String> = vec![];
    for mood in entries.iter().filter_map(|entry| entry.mood.as_deref()) {
        if !mood.is_empty() && !moods.iter().any(|known| known == mood) {
            moods.push(mood.to_owned());
        }
    }
    moods
}

#[must_use]
pub fn view<'a>(entries: &'a [JournalEntry], entry_filter: &EntryFilter) -> TimelineView<'a> {
    if entries.is_empty() {
        return TimelineView::Empty;
    }
    let matching = filter(entries, &entry_filter.search, &entry_filter.mood);
    if matching.is_empty() {
        TimelineView::NoMatches
    } else {
        TimelineView::Entries(matching)
    }
}

#[must_use]
pub fn build(entries: Vec<JournalEntry>, entry_filter: &EntryFilter) -> Timeline {
    let view = view(&entries, entry_filter);
    let state = view.state();
    let matching = match view {
        TimelineView::Entries(matching) => matching.into_iter().cloned().collect(),
        TimelineView::Empty | TimelineView::NoMatches => vec![],
    };
    Timeline {
        state,
        total: entries.len(),
        moods: mood_options(&entries),
        entries: matching,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reverie_test_helpers::fixtures::{EntryFixtureExt, entry};
    use uuid::Uuid;

    fn entries() -> Vec<JournalEntry> {
        let user_id = Uuid::new_v4();
        vec![
            entry(user_id, 40, "Long walk by the river.").with_mood("calm"),
            entry(user_id, 30, "So GRATEFUL for my sister.")
                .with_mood("grateful")
                .with_title("Family"),
            entry(user_id, 20, "Deadline tomorrow.")
                .with_mood("anxious")
                .with_summary("Feeling grateful despite the pressure."),
            entry(user_id, 10, "Quiet evening.").with_mood("calm").with_title("Gratefulness"),
            entry(user_id, 0, "No analysis for this one."),
        ]
    }

    fn contents<'a>(entries: &[&'a JournalEntry]) -> Vec<&'a str> {
        entries.iter().map(|entry| entry.content.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let entries = entries();
        let filtered = filter(&entries, "", "");
        assert_eq!(filtered.len(), entries.len());
        assert!(filtered.iter().zip(&entries).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_search_matches_content_title_and_summary() {
        let entries = entries();
        assert_eq!(
            contents(&filter(&entries, "grateful", "")),
            [
                "So GRATEFUL for my sister.",
                "Deadline tomorrow.",
                "Quiet evening."
            ]
        );
        assert_eq!(contents(&filter(&entries, "RIVER", "")), ["Long walk by the river."]);
        assert!(filter(&entries, "nothing like this", "").is_empty());
    }

    #[test]
    fn test_mood_is_exact() {
        let entries = entries();
        assert_eq!(
            contents(&filter(&entries, "", "calm")),
            ["Long walk by the river.", "Quiet evening."]
        );
        assert!(filter(&entries, "", "Calm").is_empty());
        assert_eq!(contents(&filter(&entries, "evening", "calm")), ["Quiet evening."]);
    }

    #[test]
    fn test_mood_options_in_first_appearance_order() {
        assert_eq!(mood_options(&entries()), ["calm", "grateful", "anxious"]);
        assert!(mood_options(&[]).is_empty());
    }

    #[test]
    fn test_views() {
        let entries = entries();
        assert_eq!(view(&[], &EntryFilter::default()), TimelineView::Empty);
        assert_eq!(view(&[], &EntryFilter::new("walk", "")), TimelineView::Empty);
        assert_eq!(
            view(&entries, &EntryFilter::new("walk", "anxious")),
            TimelineView::NoMatches
        );
        assert!(matches!(
            view(&entries, &EntryFilter::new("walk", "")),
            TimelineView::Entries(matching) if matching.len() == 1
        ));
    }

    #[test]
    fn test_build_timeline() {
        let timeline = build(entries(), &EntryFilter::new("", "calm"));
        assert_eq!(timeline.state, TimelineState::Entries);
        assert_eq!(timeline.total, 5);
        assert_eq!(timeline.entries.len(), 2);
        assert_eq!(timeline.moods, ["calm", "grateful", "anxious"]);

        let timeline = build(vec![], &EntryFilter::default());
        assert_eq!(timeline.state, TimelineState::Empty);
        assert!(timeline.entries.is_empty());
    }
}
