//! Notebook session facade.
//!
//! # Responsibility
//! - Expose the intents and queries consumed by the presentation layer.
//! - Synchronize edits: derive the title, write the updated note back into
//!   its notebook's sequence in place, and persist, as one synchronous call
//!   chain per edit event.
//! - Keep selection consistent with the store across deletes.
//!
//! # Invariants
//! - Every query resolves fresh data from the collection store; nothing
//!   here caches note contents.
//! - Deleting the active notebook or note clears the matching selection
//!   fields in the same intent.
//! - Re-saving identical content changes no stored bytes but still reaches
//!   the storage adapter.

use crate::model::note::{Note, NoteId, Notebook, NotebookId};
use crate::service::selection::SelectionCursor;
use crate::storage::{StorageAdapter, StorageError};
use crate::store::collection_store::CollectionStore;

/// Facade binding the collection store and the selection cursor.
///
/// All mutations run synchronously on the caller's thread in the order the
/// intents arrive; persistence is a local write-through, so no operation
/// suspends.
pub struct NotebookSession<S: StorageAdapter> {
    store: CollectionStore<S>,
    cursor: SelectionCursor,
}

impl<S: StorageAdapter> NotebookSession<S> {
    /// Loads persisted state through the adapter and starts with nothing
    /// selected.
    pub fn open(storage: S) -> Self {
        Self {
            store: CollectionStore::open(storage),
            cursor: SelectionCursor::new(),
        }
    }

    /// Creates a new empty notebook and returns it.
    pub fn create_notebook(&mut self) -> Notebook {
        self.store.create_notebook()
    }

    /// Deletes a notebook, clearing selection if it was active.
    pub fn delete_notebook(&mut self, id: NotebookId) {
        if self.store.delete_notebook(id) {
            self.cursor.clear_notebook_if_deleted(id);
        }
    }

    /// Creates a new empty note inside the active notebook and selects it,
    /// so the edit surface opens on the fresh note.
    ///
    /// Returns `None` without side effects when no notebook is active.
    pub fn create_note(&mut self) -> Option<Note> {
        let notebook_id = self.cursor.active_notebook()?;
        let note = self.store.add_note(notebook_id)?;
        self.cursor.select_note(note.id);
        Some(note)
    }

    /// Deletes a note from the active notebook, clearing the note selection
    /// if it was active.
    pub fn delete_note(&mut self, id: NoteId) {
        let Some(notebook_id) = self.cursor.active_notebook() else {
            return;
        };
        if self.store.delete_note(notebook_id, id) {
            self.cursor.clear_note_if_deleted(id);
        }
    }

    /// Activates a notebook, clearing any note selection.
    ///
    /// Unknown ids are ignored.
    pub fn select_notebook(&mut self, id: NotebookId) {
        if self.store.find_notebook(id).is_none() {
            return;
        }
        self.cursor.select_notebook(id);
    }

    /// Activates a note of the active notebook.
    ///
    /// Ids that do not resolve inside the active notebook are ignored; this
    /// is the containment guard the bare cursor leaves to its caller.
    pub fn select_note(&mut self, id: NoteId) {
        let Some(notebook_id) = self.cursor.active_notebook() else {
            return;
        };
        if self.store.find_note(notebook_id, id).is_none() {
            return;
        }
        self.cursor.select_note(id);
    }

    /// Applies an edit-surface content change to the active note.
    ///
    /// Derives the title from the first content line, replaces the note in
    /// place inside its notebook, and persists the collection, all before
    /// returning. No-op when nothing is selected.
    pub fn edit_note_content(&mut self, content: impl Into<String>) -> Option<Note> {
        let (notebook_id, note_id) = self.active_ids()?;
        self.store.edit_note_content(notebook_id, note_id, content.into())
    }

    /// Explicit save of the active note.
    ///
    /// Re-applies the note's current content: stored bytes are unchanged
    /// for identical content, but the persistence write still happens.
    pub fn save_active_note(&mut self) -> Option<Note> {
        let (notebook_id, note_id) = self.active_ids()?;
        let content = self.store.find_note(notebook_id, note_id)?.content.clone();
        self.store.edit_note_content(notebook_id, note_id, content)
    }

    /// All notebooks in insertion order.
    pub fn list_notebooks(&self) -> &[Notebook] {
        self.store.notebooks()
    }

    /// Notes of the active notebook, or an empty slice when none is active.
    pub fn notes_of_active_notebook(&self) -> &[Note] {
        self.active_notebook()
            .map(|notebook| notebook.notes.as_slice())
            .unwrap_or(&[])
    }

    /// The active notebook, resolved fresh from the collection.
    pub fn active_notebook(&self) -> Option<&Notebook> {
        self.store.find_notebook(self.cursor.active_notebook()?)
    }

    /// The active note, resolved fresh from the collection.
    ///
    /// Reflects the latest edit immediately; there is no cached copy that
    /// could lag behind the store.
    pub fn active_note(&self) -> Option<&Note> {
        let (notebook_id, note_id) = self.active_ids()?;
        self.store.find_note(notebook_id, note_id)
    }

    /// The warning recorded by the most recent failed save, if any.
    pub fn last_save_error(&self) -> Option<&StorageError> {
        self.store.last_save_error()
    }

    fn active_ids(&self) -> Option<(NotebookId, NoteId)> {
        Some((self.cursor.active_notebook()?, self.cursor.active_note()?))
    }
}
