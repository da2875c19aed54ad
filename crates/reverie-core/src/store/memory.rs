use crate::auth::Identity;
use crate::store::error::StoreError;
use crate::store::{EntryStore, check_owner};
use async_trait::async_trait;
use chrono::Utc;
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::NewJournalEntry;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps entries in process memory. Everything is lost on exit.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: RwLock<Vec<JournalEntry>>,
}

impl MemoryEntryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn insert(&self, identity: &Identity, entry: NewJournalEntry) -> Result<JournalEntry, StoreError> {
        check_owner(identity, &entry)?;
        let now = Utc::now().fixed_offset();
        let created = JournalEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            title: entry.title,
            content: entry.content,
            mood: entry.mood,
            summary: entry.summary,
            created_at: now,
            updated_at: now,
        };
        self.entries.write().await.push(created.clone());
        Ok(created)
    }

    async fn list(&self, identity: &Identity) -> Result<Vec<JournalEntry>, StoreError> {
        // Reversed first so that entries with equal timestamps come out newest insert first
        let mut entries: Vec<JournalEntry> = self
            .entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|entry| entry.user_id == identity.user_id())
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
