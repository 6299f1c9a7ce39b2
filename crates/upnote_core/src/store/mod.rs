//! In-memory collection store.
//!
//! # Responsibility
//! - Own the single mutable collection and its write-through persistence.
//! - Allocate ids that stay unique across the life of the collection.
//!
//! # Invariants
//! - Every mutating operation leaves the durable copy a complete snapshot
//!   of the in-memory collection, or records a recoverable save warning.
//! - Not-found conditions resolve as silent no-ops, never as user errors.

pub mod collection_store;
