//! Document model: points, ids, entities, floors, and the document root.

mod document;
mod entities;
mod floor;
pub mod geometry;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use document::Document;
pub use entities::{
    AssetPin, EquipmentPlacement, Flow, Label, LineStyle, PinShape, PinSize, Wall, Zone,
    DEFAULT_FLOW_COLOR, DEFAULT_ZONE_COLOR,
};
pub use floor::Floor;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// JSON has no encoding for NaN or infinities; such points never enter a document.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Floor-scoped entity id. Allocated from a per-floor counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque, stable floor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(pub Uuid);

impl FloorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FloorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FloorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The selectable entity kinds. Pins are addressed by the asset they mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Zone(EntityId),
    Wall(EntityId),
    Flow(EntityId),
    Label(EntityId),
    Pin(String),
    Equipment(EntityId),
}

impl Selection {
    /// Short kind name for logs and status text.
    pub fn kind(&self) -> &'static str {
        match self {
            Selection::Zone(_) => "zone",
            Selection::Wall(_) => "wall",
            Selection::Flow(_) => "flow",
            Selection::Label(_) => "label",
            Selection::Pin(_) => "pin",
            Selection::Equipment(_) => "equipment",
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Pin(asset_id) => write!(f, "pin {}", asset_id),
            Selection::Zone(id)
            | Selection::Wall(id)
            | Selection::Flow(id)
            | Selection::Label(id)
            | Selection::Equipment(id) => write!(f, "{} {}", self.kind(), id),
        }
    }
}
