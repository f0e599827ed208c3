//! Floor-plan entities.

use serde::{Deserialize, Serialize};

use super::geometry::{distance_to_polyline, point_in_oriented_rect, point_in_polygon};
use super::{EntityId, Point};

/// Fill color for zones drawn with the zone tool.
pub const DEFAULT_ZONE_COLOR: &str = "#8ecae6";
/// Stroke color for flows drawn with the flow tool.
pub const DEFAULT_FLOW_COLOR: &str = "#fb8500";

/// Closed polygon marking a named area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: EntityId,
    pub name: String,
    pub points: Vec<Point>,
    pub color: String,
}

impl Zone {
    pub fn contains_point(&self, p: &Point) -> bool {
        point_in_polygon(p, &self.points)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Open polyline representing a wall or partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: EntityId,
    pub points: Vec<Point>,
    #[serde(default)]
    pub style: LineStyle,
}

impl Wall {
    pub fn distance_to(&self, p: &Point) -> f64 {
        distance_to_polyline(p, &self.points)
    }
}

/// Material-flow arrow. Rendered with an arrowhead at the last point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: EntityId,
    pub points: Vec<Point>,
    #[serde(default)]
    pub label: Option<String>,
    pub color: String,
}

impl Flow {
    pub fn distance_to(&self, p: &Point) -> f64 {
        distance_to_polyline(p, &self.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: EntityId,
    pub position: Point,
    pub text: String,
    pub font_size: f64,
}

impl Label {
    /// Approximate text box: anchor at the left baseline, 0.6 em per glyph.
    pub fn contains_point(&self, p: &Point, tolerance: f64) -> bool {
        let width = self.text.chars().count().max(1) as f64 * self.font_size * 0.6;
        p.x >= self.position.x - tolerance
            && p.x <= self.position.x + width + tolerance
            && p.y >= self.position.y - tolerance
            && p.y <= self.position.y + self.font_size + tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinShape {
    #[default]
    Circle,
    Square,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl PinSize {
    /// Marker radius in document units.
    pub fn radius(self) -> f64 {
        match self {
            PinSize::Sm => 4.0,
            PinSize::Md => 6.0,
            PinSize::Lg => 9.0,
        }
    }
}

/// Marker for an external asset. At most one per asset per floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPin {
    pub asset_id: String,
    pub position: Point,
    #[serde(default)]
    pub shape: PinShape,
    #[serde(default)]
    pub size: PinSize,
}

impl AssetPin {
    /// New pin with the default circle/md style.
    pub fn new(asset_id: impl Into<String>, position: Point) -> Self {
        Self {
            asset_id: asset_id.into(),
            position,
            shape: PinShape::default(),
            size: PinSize::default(),
        }
    }

    pub fn contains_point(&self, p: &Point, tolerance: f64) -> bool {
        self.position.distance_to(p) <= self.size.radius() + tolerance
    }
}

/// Oriented equipment footprint stamped from the icon library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentPlacement {
    pub id: EntityId,
    pub block_name: String,
    pub center: Point,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation_deg: f64,
    #[serde(default)]
    pub asset_id: Option<String>,
}

impl EquipmentPlacement {
    pub fn contains_point(&self, p: &Point, tolerance: f64) -> bool {
        point_in_oriented_rect(
            p,
            &self.center,
            self.width + 2.0 * tolerance,
            self.height + 2.0 * tolerance,
            self.rotation_deg,
        )
    }
}
