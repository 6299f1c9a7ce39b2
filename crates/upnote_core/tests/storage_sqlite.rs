use rusqlite::Connection;
use upnote_core::storage::migrations::latest_version;
use upnote_core::{Collection, NotebookSession, SqliteStorage, StorageAdapter, StorageError};

#[test]
fn open_in_memory_applies_container_migrations() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    assert!(storage.load().notebooks.is_empty());
    // A save hits the kv_store table, so it only succeeds on a migrated
    // container.
    storage.save(&Collection::default()).unwrap();
}

#[test]
fn save_then_reopen_returns_the_same_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upnote.db");

    {
        let storage = SqliteStorage::open(&path).unwrap();
        let mut session = NotebookSession::open(storage);
        let notebook = session.create_notebook();
        session.select_notebook(notebook.id);
        session.create_note().unwrap();
        session.edit_note_content("Durable\nnote body").unwrap();
    }

    let storage = SqliteStorage::open(&path).unwrap();
    let session = NotebookSession::open(storage);
    assert_eq!(session.list_notebooks().len(), 1);
    assert_eq!(session.list_notebooks()[0].notes[0].title, "Durable");
}

#[test]
fn opening_the_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upnote.db");

    drop(SqliteStorage::open(&path).unwrap());
    drop(SqliteStorage::open(&path).unwrap());

    let conn = Connection::open(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn opening_a_database_with_newer_container_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = SqliteStorage::open(&path).unwrap_err();
    match err {
        StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn distinct_storage_keys_hold_independent_collections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upnote.db");

    {
        let storage = SqliteStorage::open(&path).unwrap().with_key("primary");
        let mut session = NotebookSession::open(storage);
        session.create_notebook();
        session.create_notebook();
    }

    let mut primary = SqliteStorage::open(&path).unwrap().with_key("primary");
    let mut secondary = SqliteStorage::open(&path).unwrap().with_key("secondary");
    assert_eq!(primary.key(), "primary");
    assert_eq!(primary.load().notebooks.len(), 2);
    assert!(secondary.load().notebooks.is_empty());
}

#[test]
fn corrupt_persisted_payload_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upnote.db");
    drop(SqliteStorage::open(&path).unwrap());

    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
        rusqlite::params![upnote_core::STORAGE_KEY, "{corrupt"],
    )
    .unwrap();
    drop(conn);

    let mut storage = SqliteStorage::open(&path).unwrap();
    assert!(storage.load().notebooks.is_empty());
}
