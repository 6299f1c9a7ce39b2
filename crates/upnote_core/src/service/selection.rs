//! Selection cursor over the notebook/note hierarchy.
//!
//! # Responsibility
//! - Track which notebook and note are active, by id only.
//!
//! # Invariants
//! - An active note is only meaningful inside the active notebook;
//!   selecting a different notebook clears the note unconditionally.
//! - The cursor never holds note data; reads resolve through the store.

use crate::model::note::{NoteId, NotebookId};

/// The currently active notebook/note reference pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    active_notebook: Option<NotebookId>,
    active_note: Option<NoteId>,
}

impl SelectionCursor {
    /// Creates a cursor with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_notebook(&self) -> Option<NotebookId> {
        self.active_notebook
    }

    pub fn active_note(&self) -> Option<NoteId> {
        self.active_note
    }

    /// Activates a notebook and clears any note selection.
    pub fn select_notebook(&mut self, id: NotebookId) {
        self.active_notebook = Some(id);
        self.active_note = None;
    }

    /// Activates a note.
    ///
    /// The cursor does not validate containment; the session facade only
    /// passes ids it resolved inside the active notebook.
    pub fn select_note(&mut self, id: NoteId) {
        self.active_note = Some(id);
    }

    /// Drops the notebook selection (and the note with it) when the deleted
    /// notebook was active.
    pub fn clear_notebook_if_deleted(&mut self, deleted: NotebookId) {
        if self.active_notebook == Some(deleted) {
            self.active_notebook = None;
            self.active_note = None;
        }
    }

    /// Drops the note selection when the deleted note was active.
    pub fn clear_note_if_deleted(&mut self, deleted: NoteId) {
        if self.active_note == Some(deleted) {
            self.active_note = None;
        }
    }
}
