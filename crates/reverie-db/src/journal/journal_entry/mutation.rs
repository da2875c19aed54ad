use chrono::{DateTime, FixedOffset};
use reverie_entity::journal::{journal_entry, journal_entry::Model as JournalEntryModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Inserts a single journal entry. Both timestamps are set to `created_at`.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        title: Option<String>,
        content: String,
        mood: Option<String>,
        summary: Option<String>,
        created_at: DateTime<FixedOffset>,
    ) -> Result<JournalEntryModel, DbErr> {
        let journal_entry = journal_entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(title),
            content: ActiveValue::Set(content),
            mood: ActiveValue::Set(mood),
            summary: ActiveValue::Set(summary),
            created_at: ActiveValue::Set(created_at),
            updated_at: ActiveValue::Set(created_at),
        };

        tracing::trace!(%user_id, "inserting journal entry");
        journal_entry
            .insert(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to insert journal entry"))
    }
}
