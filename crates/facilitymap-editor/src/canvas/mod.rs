//! Tool state machine for the editing canvas.
//!
//! The canvas interprets pointer events against the active [`Tool`] and the
//! floor currently being edited. It never mutates a floor it was handed: every
//! change comes back as [`CanvasOutcome::Commit`] carrying a complete new
//! floor value, which the caller pushes through the edit history.
//!
//! Drags are transient. While the pointer is down the canvas keeps a preview
//! floor (see [`Canvas::preview`]); only pointer-up turns it into a commit.

mod types;

pub use types::{CanvasOutcome, DragHandle, PaletteItem, Tool};
use types::DragState;

use facilitymap_core::constants::{
    DEFAULT_GRID_SIZE, DEFAULT_HIT_TOLERANCE, DEFAULT_LABEL_FONT_SIZE, DEFAULT_LABEL_TEXT,
};
use tracing::debug;

use crate::model::geometry::{dedup_consecutive, nearest_vertex};
use crate::model::{
    EquipmentPlacement, Floor, Flow, Label, LineStyle, Point, Selection, Wall, Zone,
    DEFAULT_FLOW_COLOR, DEFAULT_ZONE_COLOR,
};
use crate::snap::SnapEngine;

/// Canvas interaction state: active tool, in-progress shape, selection, drag.
#[derive(Debug, Clone)]
pub struct Canvas {
    tool: Tool,
    draft: Vec<Point>,
    hover: Option<Point>,
    selection: Option<Selection>,
    drag: Option<DragState>,
    snap: SnapEngine,
    snap_enabled: bool,
    hit_tolerance: f64,
}

impl Canvas {
    /// Creates a canvas in select mode.
    pub fn new(snap: SnapEngine, snap_enabled: bool, hit_tolerance: f64) -> Self {
        Self {
            tool: Tool::Select,
            draft: Vec::new(),
            hover: None,
            selection: None,
            drag: None,
            snap,
            snap_enabled,
            hit_tolerance,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tool. Always allowed; any in-progress shape or drag is dropped.
    pub fn set_tool(&mut self, tool: Tool) {
        if !self.draft.is_empty() {
            debug!(from = %self.tool, to = %tool, points = self.draft.len(), "Abandoning in-progress shape");
        }
        self.draft.clear();
        self.hover = None;
        self.drag = None;
        self.tool = tool;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.drag = None;
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    /// Points of the shape being drawn.
    pub fn draft_points(&self) -> &[Point] {
        &self.draft
    }

    /// Snapped cursor position while drawing, for rubber-band rendering.
    pub fn hover_point(&self) -> Option<Point> {
        self.hover
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Transient floor shown while a drag is in flight.
    pub fn preview(&self) -> Option<&Floor> {
        self.drag.as_ref().and_then(|d| d.preview.as_ref())
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap_enabled = enabled;
    }

    pub fn snap_engine(&self) -> SnapEngine {
        self.snap
    }

    pub fn hit_tolerance(&self) -> f64 {
        self.hit_tolerance
    }

    fn snapped(&self, p: Point) -> Point {
        self.snap.snap_point(p, self.snap_enabled)
    }

    /// Drops state that no longer resolves against `floor` (after undo/redo
    /// or a floor switch).
    pub fn reconcile(&mut self, floor: &Floor) {
        self.drag = None;
        if let Some(selection) = &self.selection {
            if !floor.contains(selection) {
                debug!(%selection, "Selection no longer exists, clearing");
                self.selection = None;
            }
        }
    }

    /// Primary button pressed.
    pub fn pointer_down(&mut self, floor: &Floor, p: Point) -> CanvasOutcome {
        if !p.is_finite() {
            return CanvasOutcome::Idle;
        }
        match self.tool {
            Tool::Select => self.select_at(floor, p),
            Tool::Zone | Tool::Wall | Tool::Flow => {
                let snapped = self.snapped(p);
                self.draft.push(snapped);
                CanvasOutcome::Updated
            }
            Tool::Label => {
                let mut next = floor.clone();
                let id = next.allocate_id();
                next.labels.push(Label {
                    id,
                    position: self.snapped(p),
                    text: DEFAULT_LABEL_TEXT.to_string(),
                    font_size: DEFAULT_LABEL_FONT_SIZE,
                });
                self.selection = Some(Selection::Label(id));
                debug!(%id, "Created label");
                CanvasOutcome::Commit(next)
            }
        }
    }

    fn select_at(&mut self, floor: &Floor, p: Point) -> CanvasOutcome {
        // Vertex handles of the current selection take priority over hit-testing.
        if let Some(selection) = self.selection.clone() {
            if let Some(index) = floor
                .vertices(&selection)
                .and_then(|verts| nearest_vertex(&p, verts, self.hit_tolerance))
            {
                self.begin_drag(floor, selection, DragHandle::Vertex(index), p);
                return CanvasOutcome::Updated;
            }
        }

        match floor.hit_test(&p, self.hit_tolerance) {
            Some(hit) => {
                let changed = self.selection.as_ref() != Some(&hit);
                self.selection = Some(hit.clone());
                self.begin_drag(floor, hit, DragHandle::Body, p);
                if changed {
                    CanvasOutcome::Updated
                } else {
                    CanvasOutcome::Idle
                }
            }
            None => {
                self.drag = None;
                if self.selection.take().is_some() {
                    CanvasOutcome::Updated
                } else {
                    CanvasOutcome::Idle
                }
            }
        }
    }

    fn begin_drag(&mut self, floor: &Floor, target: Selection, handle: DragHandle, start: Point) {
        self.drag = Some(DragState {
            target,
            handle,
            start,
            origin: floor.clone(),
            preview: None,
        });
    }

    /// Pointer moved. Updates the drag preview or the drawing cursor.
    pub fn pointer_move(&mut self, p: Point) -> CanvasOutcome {
        if !p.is_finite() {
            return CanvasOutcome::Idle;
        }
        if matches!(self.tool, Tool::Zone | Tool::Wall | Tool::Flow) {
            self.hover = Some(self.snapped(p));
            return CanvasOutcome::Updated;
        }

        let Some(drag) = &self.drag else {
            return CanvasOutcome::Idle;
        };
        let preview = self.dragged_floor(drag, p);
        if let Some(drag) = self.drag.as_mut() {
            drag.preview = preview;
        }
        CanvasOutcome::Preview
    }

    /// Primary button released. Commits a drag that moved something.
    pub fn pointer_up(&mut self, p: Point) -> CanvasOutcome {
        let Some(drag) = self.drag.take() else {
            return CanvasOutcome::Idle;
        };
        if !p.is_finite() {
            return CanvasOutcome::Idle;
        }
        let result = self.dragged_floor(&drag, p);
        match result {
            Some(floor) if floor != drag.origin => {
                debug!(target = %drag.target, handle = ?drag.handle, "Committing drag");
                CanvasOutcome::Commit(floor)
            }
            _ => CanvasOutcome::Idle,
        }
    }

    /// Floor with the drag applied at pointer position `p`.
    fn dragged_floor(&self, drag: &DragState, p: Point) -> Option<Floor> {
        let mut floor = drag.origin.clone();
        match drag.handle {
            DragHandle::Vertex(index) => {
                let snapped = self.snapped(p);
                let vertex = floor.vertices_mut(&drag.target)?.get_mut(index)?;
                *vertex = snapped;
            }
            DragHandle::Body => {
                // Moves in whole grid steps, so a click without travel is a no-op
                // even for entities sitting off the grid.
                let from = self.snapped(drag.start);
                let to = self.snapped(p);
                let (dx, dy) = (to.x - from.x, to.y - from.y);
                if let Some(anchor) = floor.anchor(&drag.target) {
                    floor.set_anchor(&drag.target, anchor.offset(dx, dy));
                } else {
                    for vertex in floor.vertices_mut(&drag.target)?.iter_mut() {
                        *vertex = vertex.offset(dx, dy);
                    }
                }
            }
        }
        Some(floor)
    }

    /// Double-click: adds the final point and finishes the shape.
    pub fn double_click(&mut self, floor: &Floor, p: Point) -> CanvasOutcome {
        if !matches!(self.tool, Tool::Zone | Tool::Wall | Tool::Flow) || !p.is_finite() {
            return CanvasOutcome::Idle;
        }
        let snapped = self.snapped(p);
        if self.draft.last() != Some(&snapped) {
            self.draft.push(snapped);
        }
        self.finish_shape(floor)
    }

    /// Commits the in-progress shape. Degenerate shapes are discarded.
    pub fn finish_shape(&mut self, floor: &Floor) -> CanvasOutcome {
        let Some(min_points) = self.tool.min_points() else {
            return CanvasOutcome::Idle;
        };
        let points = dedup_consecutive(&std::mem::take(&mut self.draft));
        self.hover = None;
        if points.len() < min_points {
            debug!(tool = %self.tool, points = points.len(), "Discarding degenerate shape");
            return CanvasOutcome::Updated;
        }

        let mut next = floor.clone();
        let id = next.allocate_id();
        let selection = match self.tool {
            Tool::Zone => {
                next.zones.push(Zone {
                    id,
                    name: format!("Zone {}", id.0),
                    points,
                    color: DEFAULT_ZONE_COLOR.to_string(),
                });
                Selection::Zone(id)
            }
            Tool::Wall => {
                next.walls.push(Wall {
                    id,
                    points,
                    style: LineStyle::Solid,
                });
                Selection::Wall(id)
            }
            Tool::Flow => {
                next.flows.push(Flow {
                    id,
                    points,
                    label: None,
                    color: DEFAULT_FLOW_COLOR.to_string(),
                });
                Selection::Flow(id)
            }
            Tool::Select | Tool::Label => return CanvasOutcome::Idle,
        };
        debug!(%selection, "Committed shape");
        self.selection = Some(selection);
        CanvasOutcome::Commit(next)
    }

    /// Escape: discards the in-progress shape and any drag.
    pub fn cancel(&mut self) -> CanvasOutcome {
        let had_state = !self.draft.is_empty() || self.drag.is_some();
        self.draft.clear();
        self.hover = None;
        self.drag = None;
        if had_state {
            CanvasOutcome::Updated
        } else {
            CanvasOutcome::Idle
        }
    }

    /// Palette drop in any tool: places or repositions a pin or equipment.
    pub fn drop_item(&mut self, floor: &Floor, item: &PaletteItem, p: Point) -> CanvasOutcome {
        if !p.is_finite() {
            return CanvasOutcome::Idle;
        }
        let position = self.snapped(p);
        let mut next = floor.clone();

        let selection = match item {
            PaletteItem::Asset { asset_id } => {
                next.place_pin(asset_id, position);
                Selection::Pin(asset_id.clone())
            }
            PaletteItem::Equipment { icon, asset_id } => {
                let existing = asset_id.as_deref().and_then(|asset| {
                    next.equipment
                        .iter_mut()
                        .find(|eq| eq.asset_id.as_deref() == Some(asset))
                });
                match existing {
                    Some(placement) => {
                        placement.center = position;
                        Selection::Equipment(placement.id)
                    }
                    None => {
                        let id = next.allocate_id();
                        next.equipment.push(EquipmentPlacement {
                            id,
                            block_name: icon.block_name.clone(),
                            center: position,
                            width: icon.width_units,
                            height: icon.height_units,
                            rotation_deg: 0.0,
                            asset_id: asset_id.clone(),
                        });
                        Selection::Equipment(id)
                    }
                }
            }
        };

        debug!(%selection, x = position.x, y = position.y, "Dropped palette item");
        self.drag = None;
        self.selection = Some(selection);
        CanvasOutcome::Commit(next)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(
            SnapEngine::new(DEFAULT_GRID_SIZE),
            true,
            DEFAULT_HIT_TOLERANCE,
        )
    }
}
