//! Coordinate transformation between physical survey space and render space.
//!
//! Physical coordinates are Y-up (north positive) inside a surveyed bounding
//! box. Render coordinates are Y-down with (0,0) at the top-left of that box
//! and scaled by a fixed factor.
//!
//! ```text
//! render_x = (x - x_min) * scale
//! render_y = (y_max - y) * scale   // Flip Y-axis
//! ```
//!
//! Points outside the box map off-canvas; nothing is clamped.

use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    scale: f64,
}

impl CoordinateTransform {
    /// Creates a transform for the given physical bounding box and
    /// render-units-per-physical-unit scale.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, scale: f64) -> Self {
        debug_assert!(
            scale.is_finite() && scale > 0.0,
            "scale must be positive and finite, got {scale}"
        );
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Physical bounds as `(x_min, x_max, y_min, y_max)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.x_max, self.y_min, self.y_max)
    }

    pub fn render_width(&self) -> f64 {
        (self.x_max - self.x_min) * self.scale
    }

    pub fn render_height(&self) -> f64 {
        (self.y_max - self.y_min) * self.scale
    }

    /// Converts a physical point to render coordinates.
    pub fn to_render_space(&self, physical: Point) -> Point {
        Point::new(
            (physical.x - self.x_min) * self.scale,
            (self.y_max - physical.y) * self.scale,
        )
    }

    /// Converts a render point back to physical coordinates.
    pub fn from_render_space(&self, render: Point) -> Point {
        Point::new(
            render.x / self.scale + self.x_min,
            self.y_max - render.y / self.scale,
        )
    }

    /// Converts a render-space length (e.g. a pick radius in pixels) to
    /// physical units.
    pub fn render_length_to_physical(&self, length: f64) -> f64 {
        length / self.scale
    }
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        let (x_min, x_max, y_min, y_max) = facilitymap_core::constants::DEFAULT_PHYSICAL_BOUNDS;
        Self::new(
            x_min,
            x_max,
            y_min,
            y_max,
            facilitymap_core::constants::DEFAULT_RENDER_SCALE,
        )
    }
}
