use crate::journal::JournalEntry;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Search term and mood selection of the timeline. Empty values do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EntryFilter {
    /// Case-insensitive substring of content, title or summary.
    #[serde(default)]
    pub search: String,
    /// Exact mood value.
    #[serde(default)]
    pub mood: String,
}

impl EntryFilter {
    #[must_use]
    pub fn new(search: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            mood: mood.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.mood.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineState {
    /// The account has no entries at all.
    Empty,
    /// There are entries, but the filter matches none of them.
    NoMatches,
    Entries,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Timeline {
    pub state: TimelineState,
    /// Number of loaded entries before filtering.
    pub total: usize,
    /// Distinct moods present in the loaded entries.
    pub moods: Vec<String>,
    pub entries: Vec<JournalEntry>,
}
