//! Read-only view over the published snapshot.

use crate::model::{Document, Floor, FloorId, Point, Selection};
use crate::persistence::{load_published, BlobStore};

/// Published layout as consumed by the viewer. Has no mutating operations.
#[derive(Debug, Clone)]
pub struct PublishedViewer {
    document: Document,
    active_floor: FloorId,
}

impl PublishedViewer {
    /// Opens the `published` slot. `None` if nothing usable was published.
    pub fn open(store: &dyn BlobStore) -> Option<Self> {
        load_published(store).map(Self::from_document)
    }

    pub fn from_document(document: Document) -> Self {
        let active_floor = document.first_floor().id;
        Self {
            document,
            active_floor,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn floors(&self) -> &[Floor] {
        self.document.floors()
    }

    pub fn active_floor(&self) -> &Floor {
        self.document
            .floor(self.active_floor)
            .unwrap_or_else(|| self.document.first_floor())
    }

    /// Switches the displayed floor. Returns `false` for an unknown id.
    pub fn show_floor(&mut self, id: FloorId) -> bool {
        if self.document.floor(id).is_none() {
            return false;
        }
        self.active_floor = id;
        true
    }

    /// Entity under `p` on the displayed floor, for hover details.
    pub fn inspect(&self, p: Point, tolerance: f64) -> Option<Selection> {
        self.active_floor().hit_test(&p, tolerance)
    }
}
