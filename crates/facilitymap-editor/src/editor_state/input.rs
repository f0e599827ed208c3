//! Pointer and keyboard input for the editor session.
//!
//! Pointer positions are in physical (document) coordinates; convert render
//! positions with [`crate::transform::CoordinateTransform::from_render_space`]
//! first.

use tracing::warn;

use super::EditorState;
use crate::canvas::{CanvasOutcome, PaletteItem, Tool};
use crate::model::{Floor, Point};
use crate::shortcuts::{resolve, EditorAction, KeyInput};

impl EditorState {
    pub fn tool(&self) -> Tool {
        self.canvas.tool()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.canvas.set_tool(tool);
    }

    /// Points of the shape being drawn.
    pub fn draft_points(&self) -> &[Point] {
        self.canvas.draft_points()
    }

    /// Snapped cursor position while drawing.
    pub fn hover_point(&self) -> Option<Point> {
        self.canvas.hover_point()
    }

    pub fn is_dragging(&self) -> bool {
        self.canvas.is_dragging()
    }

    pub fn snap_enabled(&self) -> bool {
        self.canvas.snap_enabled()
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.canvas.set_snap_enabled(enabled);
    }

    /// Floor to draw: the drag preview while one is in flight, otherwise the
    /// active floor.
    pub fn display_floor(&self) -> &Floor {
        self.canvas.preview().unwrap_or_else(|| self.active_floor())
    }

    pub fn pointer_down(&mut self, p: Point) -> CanvasOutcome {
        let floor = self.active_floor().clone();
        let outcome = self.canvas.pointer_down(&floor, p);
        self.apply_outcome(outcome)
    }

    pub fn pointer_move(&mut self, p: Point) -> CanvasOutcome {
        self.canvas.pointer_move(p)
    }

    pub fn pointer_up(&mut self, p: Point) -> CanvasOutcome {
        let outcome = self.canvas.pointer_up(p);
        self.apply_outcome(outcome)
    }

    pub fn double_click(&mut self, p: Point) -> CanvasOutcome {
        let floor = self.active_floor().clone();
        let outcome = self.canvas.double_click(&floor, p);
        self.apply_outcome(outcome)
    }

    pub fn finish_shape(&mut self) -> CanvasOutcome {
        let floor = self.active_floor().clone();
        let outcome = self.canvas.finish_shape(&floor);
        self.apply_outcome(outcome)
    }

    pub fn cancel(&mut self) -> CanvasOutcome {
        self.canvas.cancel()
    }

    /// Drops a palette item at `p` regardless of the active tool.
    pub fn drop_item(&mut self, item: &PaletteItem, p: Point) -> CanvasOutcome {
        let floor = self.active_floor().clone();
        let outcome = self.canvas.drop_item(&floor, item, p);
        self.apply_outcome(outcome)
    }

    /// Resolves and performs a keyboard shortcut. Returns the action taken.
    pub fn handle_key(&mut self, input: &KeyInput) -> Option<EditorAction> {
        let action = resolve(input)?;
        match action {
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
            EditorAction::SelectTool(tool) => self.set_tool(tool),
            EditorAction::CancelShape => {
                self.cancel();
            }
            EditorAction::FinishShape => {
                self.finish_shape();
            }
            EditorAction::DeleteSelection => {
                self.delete_selected();
            }
        }
        Some(action)
    }

    fn apply_outcome(&mut self, outcome: CanvasOutcome) -> CanvasOutcome {
        if let CanvasOutcome::Commit(floor) = &outcome {
            if let Err(e) = self.commit_floor(floor.clone()) {
                warn!(error = %e, "Dropping canvas edit for a floor that no longer exists");
                return CanvasOutcome::Idle;
            }
        }
        outcome
    }
}
