//! In-memory storage adapter.
//!
//! # Responsibility
//! - Provide the substitutable fake for tests and ephemeral sessions.
//! - Keep serialization honest: payloads round-trip through the same JSON
//!   codec as durable adapters.

use super::{decode_collection, encode_collection, StorageAdapter, StorageResult};
use crate::model::note::Collection;
use std::cell::RefCell;
use std::rc::Rc;

/// Storage adapter backed by one in-memory storage area.
///
/// Clones share the same backing area, so a cloned handle observes every
/// write made through the adapter that was moved into a store. Tests use
/// this to assert on the exact persisted bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    area: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    /// Creates an empty storage area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage area pre-seeded with a raw payload.
    ///
    /// The payload is not validated here; malformed seeds exercise the
    /// load-fallback path.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            area: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// Returns the raw persisted payload, if any write has happened.
    pub fn raw(&self) -> Option<String> {
        self.area.borrow().clone()
    }
}

impl StorageAdapter for MemoryStorage {
    fn load(&mut self) -> Collection {
        decode_collection(self.area.borrow().as_deref())
    }

    fn save(&mut self, collection: &Collection) -> StorageResult<()> {
        let raw = encode_collection(collection)?;
        *self.area.borrow_mut() = Some(raw);
        Ok(())
    }
}
