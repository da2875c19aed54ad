mod database;
pub mod error;
mod hosted;
mod memory;

pub use database::DatabaseEntryStore;
pub use hosted::HostedEntryStore;
pub use memory::MemoryEntryStore;

use crate::auth::Identity;
use crate::store::error::StoreError;
use async_trait::async_trait;
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::NewJournalEntry;

/// Persistence of journal entries, always scoped to the calling user.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Stores a single entry. The store assigns id and timestamps.
    async fn insert(&self, identity: &Identity, entry: NewJournalEntry) -> Result<JournalEntry, StoreError>;

    /// All entries of the caller, newest first.
    async fn list(&self, identity: &Identity) -> Result<Vec<JournalEntry>, StoreError>;

    fn backend(&self) -> &'static str;
}

/// Refuses rows that would belong to someone else than the caller.
pub(crate) fn check_owner(identity: &Identity, entry: &NewJournalEntry) -> Result<(), StoreError> {
    if entry.user_id == identity.user_id() {
        Ok(())
    } else {
        tracing::warn!(user_id = %identity.user_id(), owner = %entry.user_id, "refusing entry of another user");
        Err(StoreError::Forbidden)
    }
}
