use crate::analyzer::TextAnalyzer;
use crate::auth::Identity;
use crate::store::EntryStore;
use crate::store::error::StoreError;
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::{JournalEntryDraft, NewJournalEntry};
use std::error::Error;
use std::sync::Arc;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("The entry has no content")]
    EmptyContent,

    #[error("Failed to save entry")]
    Store(#[from] StoreError),
}

/// Turns a draft into a stored entry: analyze, then insert once.
#[derive(Clone)]
pub struct CaptureWorkflow {
    analyzer: Arc<dyn TextAnalyzer>,
    store: Arc<dyn EntryStore>,
}

impl CaptureWorkflow {
    #[must_use]
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, store: Arc<dyn EntryStore>) -> Self {
        Self { analyzer, store }
    }

    #[instrument(skip_all, fields(user_id = %identity.user_id()))]
    pub async fn submit(&self, identity: &Identity, draft: &JournalEntryDraft) -> Result<JournalEntry, CaptureError> {
        if draft.is_blank() {
            return Err(CaptureError::EmptyContent);
        }

        let analysis = self.analyzer.analyze(&draft.content).await;

        let entry = NewJournalEntry {
            user_id: identity.user_id(),
            title: draft
                .title
                .as_deref()
                .map(str::trim)
                .filter(|title| !title.is_empty())
                .map(ToOwned::to_owned),
            content: draft.content.trim().to_owned(),
            mood: Some(analysis.mood),
            summary: Some(analysis.summary),
        };

        let created = self.store.insert(identity, entry).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to save journal entry");
        })?;
        tracing::info!(entry_id = %created.id, mood = ?created.mood, "journal entry created");
        Ok(created)
    }
}
