pub mod partial;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Number of characters of an entry shown before the content gets cut off.
pub const PREVIEW_CHARS: usize = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub created_at: chrono::DateTime<FixedOffset>,
    pub updated_at: chrono::DateTime<FixedOffset>,
}

impl JournalEntry {
    /// The content cut to [`PREVIEW_CHARS`] characters, with a trailing `...` if anything was dropped.
    #[must_use]
    pub fn preview(&self) -> Cow<'_, str> {
        match self.content.char_indices().nth(PREVIEW_CHARS) {
            Some((end, _)) => Cow::Owned(format!("{}...", &self.content[..end])),
            None => Cow::Borrowed(&self.content),
        }
    }
}
