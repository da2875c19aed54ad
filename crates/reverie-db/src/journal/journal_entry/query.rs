use reverie_entity::journal::{
    journal_entry, journal_entry::Entity as JournalEntry, journal_entry::Model as JournalEntryModel,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// All entries of the user, newest first.
    pub async fn get_user_journal_entries<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<JournalEntryModel>, DbErr> {
        let journal_entries = JournalEntry::find()
            .filter(journal_entry::Column::UserId.eq(user_id))
            .order_by_desc(journal_entry::Column::CreatedAt)
            .all(conn)
            .await;

        journal_entries
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user journal entries"))
    }
}
