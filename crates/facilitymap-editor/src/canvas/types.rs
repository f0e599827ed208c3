//! Canvas type definitions: Tool, DragHandle, PaletteItem, CanvasOutcome.

use crate::model::{Floor, Point, Selection};
use crate::palette::EquipmentIcon;

/// Active editing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Zone,
    Wall,
    Flow,
    Label,
}

impl Tool {
    /// Single-letter keyboard shortcut for the tool.
    pub fn shortcut(self) -> char {
        match self {
            Tool::Select => 'v',
            Tool::Zone => 'z',
            Tool::Wall => 'w',
            Tool::Flow => 'f',
            Tool::Label => 'l',
        }
    }

    /// Tool bound to a (case-insensitive) shortcut letter.
    pub fn from_shortcut(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'v' => Some(Tool::Select),
            'z' => Some(Tool::Zone),
            'w' => Some(Tool::Wall),
            'f' => Some(Tool::Flow),
            'l' => Some(Tool::Label),
            _ => None,
        }
    }

    /// Minimum vertex count for the shape this tool draws.
    pub fn min_points(self) -> Option<usize> {
        match self {
            Tool::Zone => Some(3),
            Tool::Wall | Tool::Flow => Some(2),
            Tool::Select | Tool::Label => None,
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tool::Select => "select",
            Tool::Zone => "zone",
            Tool::Wall => "wall",
            Tool::Flow => "flow",
            Tool::Label => "label",
        };
        f.write_str(name)
    }
}

/// Part of the selected entity being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragHandle {
    /// A single polygon/polyline vertex.
    Vertex(usize),
    /// The whole entity.
    Body,
}

/// In-flight drag. Nothing reaches history until pointer-up.
#[derive(Debug, Clone)]
pub(crate) struct DragState {
    pub target: Selection,
    pub handle: DragHandle,
    pub start: Point,
    pub origin: Floor,
    pub preview: Option<Floor>,
}

/// Item dragged from the palette onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteItem {
    Asset {
        asset_id: String,
    },
    Equipment {
        icon: EquipmentIcon,
        asset_id: Option<String>,
    },
}

/// Result of feeding an input event to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOutcome {
    /// Nothing observable changed.
    Idle,
    /// Selection or in-progress shape changed; the document did not.
    Updated,
    /// A drag produced a new transient preview of the floor.
    Preview,
    /// A new floor value to commit through history.
    Commit(Floor),
}

impl CanvasOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, CanvasOutcome::Commit(_))
    }
}
