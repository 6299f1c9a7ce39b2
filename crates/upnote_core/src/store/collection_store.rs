//! Collection store: single source of truth for notebook state.
//!
//! # Responsibility
//! - Apply create/delete/update operations to the in-memory collection.
//! - Serialize the full collection through the storage adapter after every
//!   mutation (write-through, no debouncing or batching).
//! - Allocate fresh ids above everything found in loaded data.
//!
//! # Invariants
//! - Notebook and note ids are never reused; the allocator is monotonic and
//!   seeded past the maximum persisted id, including legacy wall-clock ids.
//! - A failed save never disturbs in-memory state; it is recorded and
//!   reported as a recoverable warning.
//! - Edits replace a note in place; sequence positions never change.

use crate::model::note::{Collection, Note, NoteId, Notebook, NotebookId};
use crate::storage::{StorageAdapter, StorageError};
use log::warn;

/// Monotonic id source shared by notebooks and notes.
///
/// A single counter makes ids globally unique, which is strictly stronger
/// than the per-scope uniqueness the data model requires.
#[derive(Debug, Clone)]
struct IdAllocator {
    next_id: u64,
}

impl IdAllocator {
    /// Seeds the allocator one past the largest id in the collection.
    fn seeded_from(collection: &Collection) -> Self {
        Self {
            next_id: collection.max_id().saturating_add(1).max(1),
        }
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Owner of the in-memory collection and the injected storage adapter.
pub struct CollectionStore<S: StorageAdapter> {
    storage: S,
    collection: Collection,
    ids: IdAllocator,
    last_save_error: Option<StorageError>,
}

impl<S: StorageAdapter> CollectionStore<S> {
    /// Loads the persisted collection and takes ownership of the adapter.
    ///
    /// Loading never fails: missing or corrupt data starts an empty
    /// collection.
    pub fn open(mut storage: S) -> Self {
        let collection = storage.load();
        let ids = IdAllocator::seeded_from(&collection);
        Self {
            storage,
            collection,
            ids,
            last_save_error: None,
        }
    }

    /// Returns the current collection snapshot.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Returns all notebooks in insertion order.
    pub fn notebooks(&self) -> &[Notebook] {
        &self.collection.notebooks
    }

    /// Finds a notebook by id.
    pub fn find_notebook(&self, id: NotebookId) -> Option<&Notebook> {
        self.collection.find_notebook(id)
    }

    /// Finds a note inside a notebook.
    pub fn find_note(&self, notebook_id: NotebookId, note_id: NoteId) -> Option<&Note> {
        self.collection.find_notebook(notebook_id)?.find_note(note_id)
    }

    /// Appends a new empty notebook with a fresh id and placeholder title.
    ///
    /// Never fails; triggers persistence.
    pub fn create_notebook(&mut self) -> Notebook {
        let notebook = Notebook::new(self.ids.next());
        self.collection.notebooks.push(notebook.clone());
        self.persist();
        notebook
    }

    /// Removes a notebook and its notes. No-op when the id is absent.
    ///
    /// Returns whether anything was removed. The caller is responsible for
    /// clearing selection state that referenced the notebook.
    pub fn delete_notebook(&mut self, id: NotebookId) -> bool {
        if !self.collection.remove_notebook(id) {
            return false;
        }
        self.persist();
        true
    }

    /// Replaces the notebook with a matching id in place.
    ///
    /// An unknown id leaves the store untouched: the stale update is
    /// reported to diagnostics but never surfaced as a user error.
    pub fn update_notebook(&mut self, notebook: Notebook) -> bool {
        let id = notebook.id;
        if !self.collection.replace_notebook(notebook) {
            warn!("event=notebook_update module=store status=skipped reason=unknown_id id={id}");
            return false;
        }
        self.persist();
        true
    }

    /// Appends a new empty note to the given notebook.
    ///
    /// Returns `None` without side effects when the notebook id does not
    /// exist; callers guard by checking a notebook is selected first.
    pub fn add_note(&mut self, notebook_id: NotebookId) -> Option<Note> {
        let notebook = self.collection.find_notebook_mut(notebook_id)?;
        let note = Note::new(self.ids.next());
        notebook.notes.push(note.clone());
        self.persist();
        Some(note)
    }

    /// Removes a note from a notebook. No-op when either id is absent.
    pub fn delete_note(&mut self, notebook_id: NotebookId, note_id: NoteId) -> bool {
        let Some(notebook) = self.collection.find_notebook_mut(notebook_id) else {
            return false;
        };
        if !notebook.remove_note(note_id) {
            return false;
        }
        self.persist();
        true
    }

    /// Sets a note's content, recomputing the derived title.
    ///
    /// The note keeps its id and position. Identical content is still
    /// written through, so an explicit save always reaches storage.
    pub fn edit_note_content(
        &mut self,
        notebook_id: NotebookId,
        note_id: NoteId,
        new_content: impl Into<String>,
    ) -> Option<Note> {
        let notebook = self.collection.find_notebook_mut(notebook_id)?;
        let note = notebook.find_note_mut(note_id)?;
        note.apply_edit(new_content.into());
        let updated = note.clone();
        self.persist();
        Some(updated)
    }

    /// Returns the warning recorded by the most recent failed save, if the
    /// durable copy is currently behind the in-memory collection.
    pub fn last_save_error(&self) -> Option<&StorageError> {
        self.last_save_error.as_ref()
    }

    fn persist(&mut self) {
        match self.storage.save(&self.collection) {
            Ok(()) => self.last_save_error = None,
            Err(err) => {
                warn!("event=collection_save module=store status=error error={err}");
                self.last_save_error = Some(err);
            }
        }
    }
}
