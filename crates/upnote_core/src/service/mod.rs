//! Core use-case services.
//!
//! # Responsibility
//! - Track the active notebook/note selection.
//! - Orchestrate store calls into the intent/query API consumed by the
//!   presentation layer.

pub mod selection;
pub mod session;
