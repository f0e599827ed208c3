//! Editor session state.
//!
//! `EditorState` owns one editing session: the document history, which floor
//! is active, and the canvas interaction state. It is an ordinary value; the
//! caller decides whether to share it (see [`crate::persistence::spawn_autosave`]).
//!
//! This module is split into submodules:
//! - `floors`: add, rename, delete, reorder, activate floors
//! - `properties`: property setters and deletion of the selection
//! - `layout`: templates and CSV pin import
//! - `input`: pointer and keyboard events
//! - `file_io`: load, save, publish

mod file_io;
mod floors;
mod input;
mod layout;
mod properties;

use facilitymap_core::constants::{
    DEFAULT_GRID_SIZE, DEFAULT_HISTORY_DEPTH, DEFAULT_HIT_TOLERANCE, DEFAULT_PHYSICAL_BOUNDS,
    DEFAULT_RENDER_SCALE,
};
use facilitymap_core::EditorError;
use tracing::debug;

use crate::canvas::Canvas;
use crate::history::EditHistory;
use crate::model::{Document, Floor, FloorId, Selection};
use crate::snap::SnapEngine;
use crate::transform::CoordinateTransform;

/// Session tuning, usually derived from the user's configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    pub grid_size: f64,
    pub snap_enabled: bool,
    pub history_depth: usize,
    pub hit_tolerance: f64,
    /// Physical bounds as `(x_min, x_max, y_min, y_max)`.
    pub bounds: (f64, f64, f64, f64),
    pub render_scale: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snap_enabled: true,
            history_depth: DEFAULT_HISTORY_DEPTH,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            bounds: DEFAULT_PHYSICAL_BOUNDS,
            render_scale: DEFAULT_RENDER_SCALE,
        }
    }
}

/// A single editing session.
#[derive(Debug, Clone)]
pub struct EditorState {
    history: EditHistory<Document>,
    active_floor: FloorId,
    canvas: Canvas,
    transform: CoordinateTransform,
    revision: u64,
}

impl EditorState {
    /// Starts a session on a fresh single-floor document.
    pub fn new(options: EditorOptions) -> Self {
        Self::with_document(Document::new(), options)
    }

    /// Starts a session on an existing document. History starts empty.
    pub fn with_document(document: Document, options: EditorOptions) -> Self {
        let (x_min, x_max, y_min, y_max) = options.bounds;
        let active_floor = document.first_floor().id;
        Self {
            history: EditHistory::with_depth(document, options.history_depth),
            active_floor,
            canvas: Canvas::new(
                SnapEngine::new(options.grid_size),
                options.snap_enabled,
                options.hit_tolerance,
            ),
            transform: CoordinateTransform::new(x_min, x_max, y_min, y_max, options.render_scale),
            revision: 0,
        }
    }

    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &EditHistory<Document> {
        &self.history
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Bumped on every document change, including undo and redo.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_floor_id(&self) -> FloorId {
        self.active_floor
    }

    pub fn active_floor(&self) -> &Floor {
        let document = self.history.current();
        document
            .floor(self.active_floor)
            .unwrap_or_else(|| document.first_floor())
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.canvas.selection()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Steps back one document state. No-op when history is empty.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.revision += 1;
        self.reconcile();
        debug!(revision = self.revision, "Undo");
        true
    }

    /// Steps forward one document state. No-op when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.revision += 1;
        self.reconcile();
        debug!(revision = self.revision, "Redo");
        true
    }

    /// Replaces the whole session document and forgets history.
    pub fn replace_document(&mut self, document: Document) {
        self.active_floor = document.first_floor().id;
        self.history.reset(document);
        self.canvas.set_tool(self.canvas.tool());
        self.canvas.clear_selection();
        self.revision += 1;
    }

    /// Pushes a new document through history.
    pub(crate) fn commit(&mut self, document: Document) {
        self.history.set(document);
        self.revision += 1;
        self.reconcile();
    }

    /// Replaces one floor of the current document through history.
    pub(crate) fn commit_floor(&mut self, floor: Floor) -> Result<(), EditorError> {
        let document = self.history.current().with_floor(floor)?;
        self.commit(document);
        Ok(())
    }

    /// Applies `edit` to a copy of the active floor and commits it. `edit`
    /// returns `false` when the targeted entity does not exist.
    pub(crate) fn edit_active_floor(
        &mut self,
        entity: impl std::fmt::Display,
        edit: impl FnOnce(&mut Floor) -> bool,
    ) -> Result<(), EditorError> {
        let mut floor = self.active_floor().clone();
        if !edit(&mut floor) {
            return Err(EditorError::EntityNotFound {
                floor_id: floor.id.to_string(),
                entity: entity.to_string(),
            });
        }
        self.commit_floor(floor)
    }

    /// Keeps the active floor and the selection pointing at things that exist.
    fn reconcile(&mut self) {
        let document = self.history.current();
        if document.floor(self.active_floor).is_none() {
            let fallback = document.first_floor().id;
            debug!(from = %self.active_floor, to = %fallback, "Active floor gone, switching");
            self.active_floor = fallback;
            self.canvas.set_tool(self.canvas.tool());
        }
        let floor = document
            .floor(self.active_floor)
            .unwrap_or_else(|| document.first_floor());
        self.canvas.reconcile(floor);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
