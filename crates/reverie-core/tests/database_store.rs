use chrono::Duration;
use reverie_core::auth::Identity;
use reverie_core::store::error::StoreError;
use reverie_core::store::{DatabaseEntryStore, EntryStore, MemoryEntryStore};
use reverie_db::sea_orm::Database;
use reverie_model::auth::AuthUser;
use reverie_model::journal::partial::NewJournalEntry;
use reverie_test_helpers::fixtures::entry;
use reverie_test_helpers::{SqliteDb, TestDb};
use test_log::test;
use uuid::Uuid;

fn identity() -> Identity {
    Identity::new(
        AuthUser {
            id: Uuid::new_v4(),
            email: None,
        },
        "token",
    )
}

fn new_entry(identity: &Identity, content: &str) -> NewJournalEntry {
    NewJournalEntry {
        user_id: identity.user_id(),
        title: None,
        content: content.to_owned(),
        mood: Some("calm".to_owned()),
        summary: None,
    }
}

async fn database_store(db: &SqliteDb) -> DatabaseEntryStore {
    let conn = Database::connect(db.db_uri().as_ref()).await.unwrap();
    DatabaseEntryStore::new(conn).await.unwrap()
}

#[test(tokio::test)]
async fn test_database_store_scopes_by_user() {
    let db = SqliteDb::new().unwrap();
    let store = database_store(&db).await;
    let alice = identity();
    let bob = identity();

    let first = store.insert(&alice, new_entry(&alice, "first")).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = store.insert(&alice, new_entry(&alice, "second")).await.unwrap();

    let entries = store.list(&alice).await.unwrap();
    let ids = entries.iter().map(|entry| entry.id).collect::<Vec<_>>();
    assert_eq!(ids, [second.id, first.id]);
    assert_eq!(entries[1].content, "first");
    assert!(store.list(&bob).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_database_store_refuses_foreign_rows() {
    let db = SqliteDb::new().unwrap();
    let store = database_store(&db).await;
    let alice = identity();
    let bob = identity();

    let result = store.insert(&alice, new_entry(&bob, "not mine")).await;
    assert!(matches!(result, Err(StoreError::Forbidden)));
    assert!(store.list(&bob).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_memory_store_lists_newest_first() {
    let alice = identity();
    let seeded = vec![
        entry(alice.user_id(), 0, "oldest"),
        entry(alice.user_id(), 20, "newest"),
        entry(alice.user_id(), 10, "middle"),
        entry(Uuid::new_v4(), 30, "someone else"),
    ];
    let store = MemoryEntryStore::with_entries(seeded);

    let entries = store.list(&alice).await.unwrap();
    let contents = entries.iter().map(|entry| entry.content.as_str()).collect::<Vec<_>>();
    assert_eq!(contents, ["newest", "middle", "oldest"]);
    assert!(
        entries
            .windows(2)
            .all(|pair| pair[0].created_at - pair[1].created_at >= Duration::minutes(10))
    );

    let created = store.insert(&alice, new_entry(&alice, "just now")).await.unwrap();
    assert_eq!(store.list(&alice).await.unwrap().first(), Some(&created));
    assert!(matches!(
        store.insert(&alice, new_entry(&identity(), "foreign")).await,
        Err(StoreError::Forbidden)
    ));
}
