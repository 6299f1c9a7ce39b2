//! SQLite-backed storage adapter.
//!
//! # Responsibility
//! - Persist the serialized collection under one named key in a key/value
//!   table, a durable analogue of browser local storage.
//! - Bootstrap connections and apply container migrations before first use.
//!
//! # Invariants
//! - One adapter instance owns one connection and one storage key.
//! - Reads never fail the caller: any read error degrades to an empty
//!   collection with a warn-level diagnostic.

use super::migrations::apply_migrations;
use super::{
    decode_collection, encode_collection, StorageAdapter, StorageError, StorageResult, STORAGE_KEY,
};
use crate::model::note::Collection;
use log::{error, info, warn};
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::{Duration, Instant};

/// Storage adapter holding the collection blob in a SQLite key/value table.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
    key: String,
}

impl SqliteStorage {
    /// Opens a database file and applies pending container migrations.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=file");

        let result = Connection::open(path)
            .map_err(StorageError::from)
            .and_then(Self::bootstrap);
        finish_open_event("file", started_at, &result);
        result
    }

    /// Opens an in-memory database, mainly for tests and demos.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=memory");

        let result = Connection::open_in_memory()
            .map_err(StorageError::from)
            .and_then(Self::bootstrap);
        finish_open_event("memory", started_at, &result);
        result
    }

    /// Replaces the storage key this adapter reads and writes.
    ///
    /// Distinct keys in the same database hold independent collections.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Returns the storage key this adapter is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn bootstrap(mut conn: Connection) -> StorageResult<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn,
            key: STORAGE_KEY.to_string(),
        })
    }

    fn read_raw(&self) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv_store WHERE key = ?1;")?;
        let mut rows = stmt.query([self.key.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get::<_, String>(0)?));
        }
        Ok(None)
    }
}

impl StorageAdapter for SqliteStorage {
    fn load(&mut self) -> Collection {
        match self.read_raw() {
            Ok(raw) => decode_collection(raw.as_deref()),
            Err(err) => {
                warn!(
                    "event=collection_load module=storage status=fallback reason=read_failed error={err}"
                );
                Collection::default()
            }
        }
    }

    fn save(&mut self, collection: &Collection) -> StorageResult<()> {
        let raw = encode_collection(collection)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![self.key.as_str(), raw.as_str()],
        )?;
        Ok(())
    }
}

fn finish_open_event(mode: &str, started_at: Instant, result: &StorageResult<SqliteStorage>) {
    match result {
        Ok(_) => info!(
            "event=storage_open module=storage status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=storage_open module=storage status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
}
