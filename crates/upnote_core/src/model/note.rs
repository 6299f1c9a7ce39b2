//! Note, notebook and collection domain model.
//!
//! # Responsibility
//! - Define the persisted shape of the two-level notebook/note hierarchy.
//! - Own the title derivation rule applied on every content edit.
//!
//! # Invariants
//! - Ids are plain integers on the wire (`{"id": number, ...}`) and are
//!   never reused within a collection.
//! - `Collection` serializes as a bare JSON array of notebooks; there is no
//!   wrapping object.
//! - A note's position inside its notebook is stable across edits.

use serde::{Deserialize, Serialize};

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Legacy data may carry wall-clock ids (epoch milliseconds), so the full
/// `u64` range must round-trip.
pub type NoteId = u64;

/// Stable identifier for a notebook.
pub type NotebookId = u64;

/// Placeholder title for a notebook that has just been created.
pub const DEFAULT_NOTEBOOK_TITLE: &str = "New Notebook";

/// Placeholder title for a note whose content has never been edited.
///
/// The placeholder survives only until the first edit; from then on the
/// title is always derived from the content's first line.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// A titled unit of text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id, unique within the parent notebook.
    pub id: NoteId,
    /// Derived from the first content line on edit; placeholder before that.
    pub title: String,
    /// Full plain-text body as received from the edit surface.
    pub content: String,
}

impl Note {
    /// Creates an empty note with the placeholder title.
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
        }
    }

    /// Replaces the content and recomputes the derived title.
    ///
    /// The id is untouched, so selection state referring to this note stays
    /// valid across edits.
    pub fn apply_edit(&mut self, content: String) {
        self.title = derive_title(&content);
        self.content = content;
    }
}

/// A named container of notes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Stable id, unique within the collection.
    pub id: NotebookId,
    pub title: String,
    pub notes: Vec<Note>,
}

impl Notebook {
    /// Creates an empty notebook with the placeholder title.
    pub fn new(id: NotebookId) -> Self {
        Self {
            id,
            title: DEFAULT_NOTEBOOK_TITLE.to_string(),
            notes: Vec::new(),
        }
    }

    /// Finds a note by id.
    pub fn find_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Finds a note by id for in-place mutation.
    pub fn find_note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }

    /// Removes a note by id. Returns whether anything was removed.
    pub fn remove_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }
}

/// The full ordered set of notebooks; the unit of persistence.
///
/// Serialization is transparent: the persisted payload is the notebook
/// array itself, matching the legacy browser-storage payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub notebooks: Vec<Notebook>,
}

impl Collection {
    /// Finds a notebook by id.
    pub fn find_notebook(&self, id: NotebookId) -> Option<&Notebook> {
        self.notebooks.iter().find(|notebook| notebook.id == id)
    }

    /// Finds a notebook by id for in-place mutation.
    pub fn find_notebook_mut(&mut self, id: NotebookId) -> Option<&mut Notebook> {
        self.notebooks.iter_mut().find(|notebook| notebook.id == id)
    }

    /// Replaces the notebook with a matching id, preserving its position.
    ///
    /// Returns `false` and leaves the collection unchanged when no notebook
    /// carries that id.
    pub fn replace_notebook(&mut self, notebook: Notebook) -> bool {
        match self.find_notebook_mut(notebook.id) {
            Some(slot) => {
                *slot = notebook;
                true
            }
            None => false,
        }
    }

    /// Removes a notebook (and its notes with it) by id.
    pub fn remove_notebook(&mut self, id: NotebookId) -> bool {
        let before = self.notebooks.len();
        self.notebooks.retain(|notebook| notebook.id != id);
        self.notebooks.len() != before
    }

    /// Returns the largest id used by any notebook or note, or 0 when empty.
    ///
    /// Used to seed the id allocator above everything already persisted,
    /// including legacy wall-clock ids.
    pub fn max_id(&self) -> u64 {
        self.notebooks
            .iter()
            .map(|notebook| {
                notebook
                    .notes
                    .iter()
                    .map(|note| note.id)
                    .fold(notebook.id, u64::max)
            })
            .fold(0, u64::max)
    }
}

/// Derives a note title from its content.
///
/// The title is the content up to (not including) the first `'\n'`, or the
/// entire string when no newline exists. Empty content yields an empty
/// title.
pub fn derive_title(content: &str) -> String {
    match content.split_once('\n') {
        Some((first_line, _)) => first_line.to_string(),
        None => content.to_string(),
    }
}
