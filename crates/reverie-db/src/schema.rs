use reverie_entity::journal::journal_entry;
use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DbErr, Schema};

const USER_TIMELINE_INDEX: &str = "idx_journal_entries_user_id_created_at";

/// Creates the `journal_entries` table and its timeline index if they are missing.
pub async fn setup_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(journal_entry::Entity);
    table.if_not_exists();
    conn.execute(backend.build(&table)).await?;

    let index = Index::create()
        .if_not_exists()
        .name(USER_TIMELINE_INDEX)
        .table(journal_entry::Entity)
        .col(journal_entry::Column::UserId)
        .col(journal_entry::Column::CreatedAt)
        .to_owned();
    conn.execute(backend.build(&index)).await?;

    tracing::debug!("journal schema ready");
    Ok(())
}
