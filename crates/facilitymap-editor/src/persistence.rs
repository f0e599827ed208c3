//! Draft/published persistence over an opaque key-value blob store.
//!
//! Two keys exist: `draft` holds the working copy and is written by autosave,
//! explicit save and publish; `published` is written by publish only and is
//! the sole input of the read-only viewer.
//!
//! Autosave is best effort. A failed autosave is logged at `warn` and retried
//! on the next tick; an explicit save or publish reports the failure.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use facilitymap_core::constants::{DRAFT_KEY, PUBLISHED_KEY};
use facilitymap_core::{StorageError, ThreadSafe};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::editor_state::EditorState;
use crate::model::Document;

/// Key-value store for serialized documents.
pub trait BlobStore: Send + Sync {
    /// Reads a blob. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the blob under `key` in a single write.
    fn set(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        (**self).set(key, blob)
    }
}

/// Process-local store, used by tests and embedders that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.lock().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.blobs.lock().insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a reader never observes a half-written blob.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    directory: PathBuf,
}

impl FileBlobStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        };

        fs::create_dir_all(&self.directory).map_err(write_failed)?;
        let target = self.path_for(key);
        let staging = self.directory.join(format!(".{key}.json.tmp"));
        fs::write(&staging, blob).map_err(write_failed)?;
        fs::rename(&staging, &target).map_err(write_failed)?;
        debug!(path = %target.display(), bytes = blob.len(), "Wrote blob");
        Ok(())
    }
}

/// Decodes a stored document. Unreadable or unparsable blobs count as absent.
fn read_document(store: &dyn BlobStore, key: &str) -> Option<Document> {
    let blob = match store.get(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Could not read stored document");
            return None;
        }
    };
    match Document::from_json(&blob) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(key, error = %e, "Stored document is not valid, ignoring it");
            None
        }
    }
}

/// Loads the draft, or a fresh single-floor document when there is none.
pub fn load_document(store: &dyn BlobStore) -> Document {
    match read_document(store, DRAFT_KEY) {
        Some(doc) => {
            info!(floors = doc.floor_count(), "Loaded draft");
            doc
        }
        None => {
            info!("No usable draft, starting a new document");
            Document::new()
        }
    }
}

/// Loads the published snapshot, if any.
pub fn load_published(store: &dyn BlobStore) -> Option<Document> {
    read_document(store, PUBLISHED_KEY)
}

/// Explicit save to `draft`.
pub fn save_draft(store: &dyn BlobStore, document: &Document) -> Result<(), StorageError> {
    let blob = document.to_json()?;
    store.set(DRAFT_KEY, &blob)?;
    info!(floors = document.floor_count(), "Saved draft");
    Ok(())
}

/// Autosave to `draft`. Failures are logged and swallowed; returns whether the
/// write went through.
pub fn autosave(store: &dyn BlobStore, document: &Document) -> bool {
    let result = document
        .to_json()
        .map_err(StorageError::from)
        .and_then(|blob| store.set(DRAFT_KEY, &blob));
    match result {
        Ok(()) => {
            debug!("Autosaved draft");
            true
        }
        Err(e) => {
            warn!(error = %e, "Autosave failed");
            false
        }
    }
}

/// Result of a successful publish.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReceipt {
    pub published_at: DateTime<Utc>,
    pub floor_count: usize,
}

/// Writes the document to `draft` and then, in one `set`, to `published`.
pub fn publish(store: &dyn BlobStore, document: &Document) -> Result<PublishReceipt, StorageError> {
    let blob = document.to_json()?;
    store.set(DRAFT_KEY, &blob)?;
    store.set(PUBLISHED_KEY, &blob)?;
    let receipt = PublishReceipt {
        published_at: Utc::now(),
        floor_count: document.floor_count(),
    };
    info!(
        floors = receipt.floor_count,
        at = %receipt.published_at.to_rfc3339(),
        "Published document"
    );
    Ok(receipt)
}

/// Skips autosaves when nothing changed since the last successful write.
#[derive(Debug, Clone, Default)]
pub struct Autosaver {
    saved_revision: Option<u64>,
}

impl Autosaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `revision` as already persisted (after load or explicit save).
    pub fn mark_saved(&mut self, revision: u64) {
        self.saved_revision = Some(revision);
    }

    pub fn is_dirty(&self, revision: u64) -> bool {
        self.saved_revision != Some(revision)
    }

    /// Autosaves `document` if `revision` is newer than the last write.
    /// Returns `true` only when a write happened and succeeded.
    pub fn poll(&mut self, store: &dyn BlobStore, document: &Document, revision: u64) -> bool {
        if !self.is_dirty(revision) {
            return false;
        }
        let saved = autosave(store, document);
        if saved {
            self.saved_revision = Some(revision);
        }
        saved
    }
}

/// Running autosave task.
pub struct AutosaveHandle {
    shutdown: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl AutosaveHandle {
    /// Stops the timer and waits for an in-flight write to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(()).await;
        if let Err(e) = self.task.await {
            warn!(error = %e, "Autosave task ended abnormally");
        }
    }
}

/// Spawns the periodic autosave of a shared editor session.
///
/// The document is snapshotted under the lock at fire time; the write itself
/// runs on the blocking pool with the lock released.
pub fn spawn_autosave<S>(
    state: ThreadSafe<EditorState>,
    store: Arc<S>,
    interval: Duration,
) -> AutosaveHandle
where
    S: BlobStore + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

    let task = tokio::spawn(async move {
        let mut autosaver = Autosaver::new();
        autosaver.mark_saved(state.lock().revision());
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = ticker.tick() => {}
            }

            let (document, revision) = {
                let guard = state.lock();
                if !autosaver.is_dirty(guard.revision()) {
                    continue;
                }
                (guard.document().clone(), guard.revision())
            };

            let store = Arc::clone(&store);
            let mut saver = autosaver.clone();
            match tokio::task::spawn_blocking(move || {
                saver.poll(&*store, &document, revision);
                saver
            })
            .await
            {
                Ok(saver) => autosaver = saver,
                Err(e) => warn!(error = %e, "Autosave write panicked"),
            }
        }
        debug!("Autosave task stopped");
    });

    AutosaveHandle {
        shutdown: shutdown_tx,
        task,
    }
}
