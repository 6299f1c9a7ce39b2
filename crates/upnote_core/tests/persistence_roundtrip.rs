use upnote_core::{
    Collection, MemoryStorage, Note, Notebook, NotebookSession, StorageAdapter, StorageResult,
};

#[test]
fn collection_roundtrips_through_json() {
    let collection = sample_collection();

    let encoded = serde_json::to_string(&collection).unwrap();
    let decoded: Collection = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, collection);
}

#[test]
fn wire_format_is_a_bare_array_with_stable_field_names() {
    let collection = sample_collection();

    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {
                "id": 1,
                "title": "Groceries",
                "notes": [
                    {"id": 2, "title": "Shopping", "content": "Shopping\nmilk, eggs"}
                ]
            },
            {"id": 3, "title": "New Notebook", "notes": []}
        ])
    );
}

#[test]
fn legacy_wall_clock_ids_roundtrip_unchanged() {
    let raw = r#"[{"id":1706000000000,"title":"Old","notes":[{"id":1706000000001,"title":"t","content":"t\nbody"}]}]"#;

    let collection: Collection = serde_json::from_str(raw).unwrap();
    assert_eq!(collection.notebooks[0].id, 1_706_000_000_000);
    assert_eq!(collection.notebooks[0].notes[0].id, 1_706_000_000_001);

    let reencoded = serde_json::to_string(&collection).unwrap();
    assert_eq!(reencoded, raw);
}

#[test]
fn absent_payload_loads_an_empty_collection() {
    let session = NotebookSession::open(MemoryStorage::new());
    assert!(session.list_notebooks().is_empty());
}

#[test]
fn malformed_payload_loads_an_empty_collection() {
    for raw in ["not json at all", "{\"id\":1}", "[{\"id\":\"text\"}]", ""] {
        let session = NotebookSession::open(MemoryStorage::from_raw(raw));
        assert!(
            session.list_notebooks().is_empty(),
            "payload {raw:?} should fall back to empty"
        );
    }
}

#[test]
fn session_state_survives_a_reload_through_the_same_area() {
    let storage = MemoryStorage::new();
    let probe = storage.clone();

    let mut session = NotebookSession::open(storage);
    let notebook = session.create_notebook();
    session.select_notebook(notebook.id);
    session.create_note().unwrap();
    session.edit_note_content("Meeting\nagenda items").unwrap();
    drop(session);

    let reloaded = NotebookSession::open(probe);
    assert_eq!(reloaded.list_notebooks().len(), 1);
    assert_eq!(reloaded.list_notebooks()[0].notes[0].title, "Meeting");
    // Selection is per-session state, not part of the persisted blob.
    assert!(reloaded.active_notebook().is_none());
}

#[test]
fn resaving_identical_content_is_byte_idempotent_but_still_writes() {
    let storage = MemoryStorage::new();
    let probe = storage.clone();
    let counter = CountingStorage::wrap(storage);
    let saves = counter.saves.clone();

    let mut session = NotebookSession::open(counter);
    let notebook = session.create_notebook();
    session.select_notebook(notebook.id);
    let note = session.create_note().unwrap();
    session.edit_note_content("Todo\nfirst item").unwrap();

    let bytes_before = probe.raw().unwrap();
    let saves_before = saves.get();
    let position_before = position_of(&probe, note.id);

    let saved = session.save_active_note().unwrap();

    assert_eq!(saved.id, note.id);
    assert_eq!(probe.raw().unwrap(), bytes_before);
    assert_eq!(saves.get(), saves_before + 1);
    assert_eq!(position_of(&probe, note.id), position_before);
}

/// Adapter wrapper counting save calls, for write-through assertions.
struct CountingStorage {
    inner: MemoryStorage,
    saves: std::rc::Rc<std::cell::Cell<u32>>,
}

impl CountingStorage {
    fn wrap(inner: MemoryStorage) -> Self {
        Self {
            inner,
            saves: std::rc::Rc::new(std::cell::Cell::new(0)),
        }
    }
}

impl StorageAdapter for CountingStorage {
    fn load(&mut self) -> Collection {
        self.inner.load()
    }

    fn save(&mut self, collection: &Collection) -> StorageResult<()> {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(collection)
    }
}

fn sample_collection() -> Collection {
    Collection {
        notebooks: vec![
            Notebook {
                id: 1,
                title: "Groceries".to_string(),
                notes: vec![Note {
                    id: 2,
                    title: "Shopping".to_string(),
                    content: "Shopping\nmilk, eggs".to_string(),
                }],
            },
            Notebook::new(3),
        ],
    }
}

fn position_of(probe: &MemoryStorage, note_id: u64) -> usize {
    let collection: Collection = serde_json::from_str(&probe.raw().unwrap()).unwrap();
    collection.notebooks[0]
        .notes
        .iter()
        .position(|note| note.id == note_id)
        .expect("note should be persisted")
}
