//! Load, save and publish for the editor session.

use facilitymap_core::StorageError;

use super::{EditorOptions, EditorState};
use crate::persistence::{self, BlobStore, PublishReceipt};

impl EditorState {
    /// Opens a session on the stored draft, or on a fresh document when the
    /// draft is missing or unreadable.
    pub fn load_from_store(store: &dyn BlobStore, options: EditorOptions) -> Self {
        Self::with_document(persistence::load_document(store), options)
    }

    /// Explicit save to `draft`. The in-memory document is never touched.
    pub fn save(&self, store: &dyn BlobStore) -> Result<(), StorageError> {
        persistence::save_draft(store, self.document())
    }

    /// Writes the current document to `draft` and `published`.
    pub fn publish(&self, store: &dyn BlobStore) -> Result<PublishReceipt, StorageError> {
        persistence::publish(store, self.document())
    }
}
