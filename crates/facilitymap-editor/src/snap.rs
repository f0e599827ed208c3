//! Grid snapping.

use crate::model::Point;

/// Quantizes values to a uniform grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapEngine {
    grid_size: f64,
}

impl SnapEngine {
    pub fn new(grid_size: f64) -> Self {
        debug_assert!(
            grid_size.is_finite() && grid_size > 0.0,
            "grid_size must be positive and finite, got {grid_size}"
        );
        Self { grid_size }
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Rounds `value` to the nearest grid multiple when `enabled`.
    pub fn snap(&self, value: f64, enabled: bool) -> f64 {
        if !enabled {
            return value;
        }
        (value / self.grid_size).round() * self.grid_size
    }

    /// Snaps both axes independently.
    pub fn snap_point(&self, point: Point, enabled: bool) -> Point {
        Point::new(self.snap(point.x, enabled), self.snap(point.y, enabled))
    }
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::new(facilitymap_core::constants::DEFAULT_GRID_SIZE)
    }
}
