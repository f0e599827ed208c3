use std::sync::Arc;
use std::time::Duration;

use facilitymap_core::constants::DRAFT_KEY;
use facilitymap_core::thread_safe;
use facilitymap_editor::{
    load_document, spawn_autosave, Autosaver, BlobStore, Document, EditorState, MemoryBlobStore,
    Point, Tool,
};

#[test]
fn test_autosaver_skips_unchanged_revision() {
    let store = MemoryBlobStore::new();
    let doc = Document::new();
    let mut autosaver = Autosaver::new();

    assert!(autosaver.poll(&store, &doc, 1));
    assert!(!autosaver.poll(&store, &doc, 1));
    assert!(autosaver.poll(&store, &doc, 2));
}

#[test]
fn test_autosaver_retries_after_failure() {
    struct Flaky {
        inner: MemoryBlobStore,
        fail: parking_lot::Mutex<bool>,
    }
    impl BlobStore for Flaky {
        fn get(&self, key: &str) -> Result<Option<String>, facilitymap_core::StorageError> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, blob: &str) -> Result<(), facilitymap_core::StorageError> {
            if *self.fail.lock() {
                return Err(facilitymap_core::StorageError::WriteFailed {
                    key: key.into(),
                    reason: "offline".into(),
                });
            }
            self.inner.set(key, blob)
        }
    }

    let store = Flaky {
        inner: MemoryBlobStore::new(),
        fail: parking_lot::Mutex::new(true),
    };
    let doc = Document::new();
    let mut autosaver = Autosaver::new();

    assert!(!autosaver.poll(&store, &doc, 3));
    assert!(autosaver.is_dirty(3));

    *store.fail.lock() = false;
    assert!(autosaver.poll(&store, &doc, 3));
    assert!(!autosaver.is_dirty(3));
}

#[tokio::test]
async fn test_autosave_task_writes_changed_document() {
    let state = thread_safe(EditorState::default());
    let store = Arc::new(MemoryBlobStore::new());
    let handle = spawn_autosave(state.clone(), Arc::clone(&store), Duration::from_millis(20));

    // Unchanged session: nothing to write.
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(store.get(DRAFT_KEY).unwrap(), None);

    {
        let mut editor = state.lock();
        editor.set_tool(Tool::Label);
        editor.pointer_down(Point::new(40.0, 40.0));
    }
    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.stop().await;

    let saved = load_document(&*store);
    assert_eq!(&saved, state.lock().document());
    assert_eq!(saved.first_floor().labels.len(), 1);
}
