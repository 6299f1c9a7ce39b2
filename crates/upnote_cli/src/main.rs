//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `upnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use upnote_core::{MemoryStorage, NotebookSession};

fn main() {
    let mut session = NotebookSession::open(MemoryStorage::new());
    let notebook = session.create_notebook();
    session.select_notebook(notebook.id);
    let note = session
        .create_note()
        .and_then(|_| session.edit_note_content("Smoke check\nbody line"));

    println!("upnote_core version={}", upnote_core::core_version());
    println!(
        "upnote_core smoke notebooks={} note_title={}",
        session.list_notebooks().len(),
        note.map(|note| note.title).unwrap_or_default()
    );
}
