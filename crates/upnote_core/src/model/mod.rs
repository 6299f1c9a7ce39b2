//! Domain model for the notebook/note hierarchy.
//!
//! # Responsibility
//! - Define the canonical data structures persisted as one collection blob.
//! - Keep structural helpers (lookup, removal, id scanning) next to the data.
//!
//! # Invariants
//! - Notebook and note ids are unique within their containing scope.
//! - Note order inside a notebook is insertion order; nothing reorders it.

pub mod note;
