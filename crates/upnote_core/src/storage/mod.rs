//! Persistence adapter boundary for the notebook collection.
//!
//! # Responsibility
//! - Define the injected load/save contract in front of durable storage.
//! - Own the JSON codec shared by every adapter implementation.
//!
//! # Invariants
//! - `load` never fails: an absent or unparsable payload degrades to an
//!   empty collection with a warn-level diagnostic.
//! - `save` writes the complete serialized collection or nothing; adapters
//!   must not persist partial snapshots.

use crate::model::note::Collection;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod migrations;
pub mod sqlite;

/// Name of the single storage slot holding the serialized collection.
///
/// Matches the local-storage key legacy browser payloads were written
/// under, so migrated data loads unchanged.
pub const STORAGE_KEY: &str = "notebooks";

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by durable-storage writes and adapter bootstrap.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Serialize(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage container version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Injected persistence boundary.
///
/// The collection store owns one adapter and calls `save` synchronously
/// after every mutation. Implementations decide where the single serialized
/// payload lives; the in-memory fake substitutes for durable storage in
/// tests.
pub trait StorageAdapter {
    /// Reads the persisted collection.
    ///
    /// Infallible by contract: missing or corrupt data yields an empty
    /// collection, never an error to the caller.
    fn load(&mut self) -> Collection;

    /// Writes the complete serialized collection.
    fn save(&mut self, collection: &Collection) -> StorageResult<()>;
}

/// Decodes a raw persisted payload, falling back to an empty collection.
pub fn decode_collection(raw: Option<&str>) -> Collection {
    match raw {
        None => Collection::default(),
        Some(text) => match serde_json::from_str(text) {
            Ok(collection) => collection,
            Err(err) => {
                warn!(
                    "event=collection_load module=storage status=fallback reason=malformed_payload error={err}"
                );
                Collection::default()
            }
        },
    }
}

/// Encodes a collection into the canonical JSON payload.
pub fn encode_collection(collection: &Collection) -> StorageResult<String> {
    serde_json::to_string(collection).map_err(StorageError::from)
}
