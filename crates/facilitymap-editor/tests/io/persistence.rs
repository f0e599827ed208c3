use facilitymap_core::constants::{DRAFT_KEY, PUBLISHED_KEY};
use facilitymap_core::StorageError;
use facilitymap_editor::{
    autosave, load_document, load_published, BlobStore, Document, EditorOptions, EditorState,
    FileBlobStore, MemoryBlobStore, Point, Tool,
};
use parking_lot::Mutex;
use tempfile::TempDir;

/// Store that records writes and can be told to refuse some keys.
#[derive(Default)]
struct RecordingStore {
    inner: MemoryBlobStore,
    writes: Mutex<Vec<String>>,
    refuse: Mutex<Vec<String>>,
}

impl RecordingStore {
    fn refuse(&self, key: &str) {
        self.refuse.lock().push(key.to_string());
    }

    fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl BlobStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        if self.refuse.lock().iter().any(|k| k == key) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.writes.lock().push(key.to_string());
        self.inner.set(key, blob)
    }
}

fn session_with_zone() -> EditorState {
    let mut state = EditorState::default();
    state.set_tool(Tool::Zone);
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(100.0, 0.0));
    state.double_click(Point::new(100.0, 100.0));
    state
}

#[test]
fn test_missing_draft_gives_fresh_document() {
    let store = MemoryBlobStore::new();
    let doc = load_document(&store);
    assert_eq!(doc.floor_count(), 1);
    assert_eq!(doc.first_floor().entity_count(), 0);
}

#[test]
fn test_unparsable_draft_is_treated_as_absent() {
    let store = MemoryBlobStore::new();
    store.set(DRAFT_KEY, "{ not json").unwrap();
    assert_eq!(load_document(&store).floor_count(), 1);

    store.set(DRAFT_KEY, r#"{"floors": []}"#).unwrap();
    assert_eq!(load_document(&store).floor_count(), 1);
}

#[test]
fn test_save_then_load_restores_document() {
    let store = MemoryBlobStore::new();
    let state = session_with_zone();
    state.save(&store).unwrap();

    let reopened = EditorState::load_from_store(&store, EditorOptions::default());
    assert_eq!(reopened.document(), state.document());
    assert!(!reopened.can_undo());
}

#[test]
fn test_publish_writes_draft_then_published() {
    let store = RecordingStore::default();
    let state = session_with_zone();
    let receipt = state.publish(&store).unwrap();

    assert_eq!(store.writes(), vec![DRAFT_KEY.to_string(), PUBLISHED_KEY.to_string()]);
    assert_eq!(receipt.floor_count, 1);
    assert_eq!(load_published(&store).as_ref(), Some(state.document()));
}

#[test]
fn test_save_never_touches_published() {
    let store = RecordingStore::default();
    session_with_zone().save(&store).unwrap();
    assert_eq!(store.writes(), vec![DRAFT_KEY.to_string()]);
    assert!(load_published(&store).is_none());
}

#[test]
fn test_published_snapshot_unaffected_by_later_edits() {
    let store = MemoryBlobStore::new();
    let mut state = session_with_zone();
    state.publish(&store).unwrap();
    let published = load_published(&store).unwrap();

    state.set_tool(Tool::Label);
    state.pointer_down(Point::new(300.0, 300.0));
    state.add_floor("Mezzanine");
    state.save(&store).unwrap();

    assert_eq!(load_published(&store).unwrap(), published);
    assert_eq!(published.floor_count(), 1);
    assert!(published.first_floor().labels.is_empty());
    assert_eq!(load_document(&store).floor_count(), 2);
}

#[test]
fn test_failed_save_reports_error_and_keeps_document() {
    let store = RecordingStore::default();
    store.refuse(DRAFT_KEY);
    let state = session_with_zone();
    let before = state.document().clone();

    let err = state.save(&store).unwrap_err();
    assert!(matches!(err, StorageError::WriteFailed { .. }));
    assert_eq!(state.document(), &before);
}

#[test]
fn test_failed_publish_leaves_published_untouched() {
    let store = RecordingStore::default();
    let first = session_with_zone();
    first.publish(&store).unwrap();

    store.refuse(PUBLISHED_KEY);
    let mut second = session_with_zone();
    second.add_floor("Annex");
    assert!(second.publish(&store).is_err());
    assert_eq!(load_published(&store).as_ref(), Some(first.document()));
}

#[test]
fn test_autosave_swallows_failures() {
    let store = RecordingStore::default();
    store.refuse(DRAFT_KEY);
    assert!(!autosave(&store, &Document::new()));
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileBlobStore::new(dir.path().join("maps"));
    assert_eq!(store.get(DRAFT_KEY).unwrap(), None);

    let state = session_with_zone();
    state.publish(&store).unwrap();

    assert!(store.path_for(DRAFT_KEY).exists());
    assert!(store.path_for(PUBLISHED_KEY).exists());
    let reloaded = load_document(&store);
    assert_eq!(&reloaded, state.document());
}

#[test]
fn test_file_store_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let store = FileBlobStore::new(dir.path());
    store.set("draft", "one").unwrap();
    store.set("draft", "two").unwrap();
    assert_eq!(store.get("draft").unwrap().as_deref(), Some("two"));

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_non_finite_values_never_reach_the_draft() {
    let store = MemoryBlobStore::new();
    let mut state = EditorState::default();
    state.set_tool(Tool::Label);
    state.pointer_down(Point::new(40.0, 40.0));
    let label = state.active_floor().labels[0].id;

    assert!(state.set_label_font_size(label, f64::NAN).is_err());
    state.set_tool(Tool::Zone);
    state.pointer_down(Point::new(f64::INFINITY, 0.0));
    assert!(state.draft_points().is_empty());
    state.save(&store).unwrap();

    let reloaded = EditorState::load_from_store(&store, EditorOptions::default());
    assert_eq!(reloaded.document(), state.document());
    assert_eq!(reloaded.active_floor().labels.len(), 1);
}
