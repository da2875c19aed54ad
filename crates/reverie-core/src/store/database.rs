use crate::auth::Identity;
use crate::config::DatabaseConfig;
use crate::store::error::StoreError;
use crate::store::{EntryStore, check_owner};
use async_trait::async_trait;
use chrono::Utc;
use reverie_db::convert::IntoModel;
use reverie_db::journal::journal_entry::{Mutation, Query};
use reverie_db::schema::setup_schema;
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::NewJournalEntry;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::instrument;

/// Entry store on a postgres or sqlite database.
///
/// Every query is filtered by the caller, which stands in for the row-level policies of the hosted service.
#[derive(Debug)]
pub struct DatabaseEntryStore {
    conn: DatabaseConnection,
}

impl DatabaseEntryStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.as_str());
        if let Some(min_connections) = config.min_connections {
            options.min_connections(min_connections);
        }
        if let Some(max_connections) = config.max_connections {
            options.max_connections(max_connections);
        }
        options.sqlx_logging(false);

        let conn = Database::connect(options).await?;
        Self::new(conn).await
    }

    /// Wraps an open connection, creating the schema if needed.
    pub async fn new(conn: DatabaseConnection) -> Result<Self, DbErr> {
        setup_schema(&conn).await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl EntryStore for DatabaseEntryStore {
    #[instrument(skip_all, fields(user_id = %identity.user_id()))]
    async fn insert(&self, identity: &Identity, entry: NewJournalEntry) -> Result<JournalEntry, StoreError> {
        check_owner(identity, &entry)?;
        let created = Mutation::create_journal_entry(
            &self.conn,
            entry.user_id,
            entry.title,
            entry.content,
            entry.mood,
            entry.summary,
            Utc::now().fixed_offset(),
        )
        .await?;
        Ok(created.into_model())
    }

    #[instrument(skip_all, fields(user_id = %identity.user_id()))]
    async fn list(&self, identity: &Identity) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = Query::get_user_journal_entries(&self.conn, identity.user_id()).await?;
        Ok(entries.into_iter().map(IntoModel::into_model).collect())
    }

    fn backend(&self) -> &'static str {
        "database"
    }
}
