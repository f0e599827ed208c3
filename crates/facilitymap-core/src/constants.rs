//! Editor-wide default values.
//!
//! These are the documented defaults; every one of them can be overridden
//! through the settings crate.

/// Grid spacing used by the snap engine, in document units.
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Number of past document states kept by the edit history.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Interval between autosaves of the working document.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

/// Render units per physical unit.
pub const DEFAULT_RENDER_SCALE: f64 = 2.0;

/// Pick distance for hit-testing, in document units.
pub const DEFAULT_HIT_TOLERANCE: f64 = 6.0;

/// Physical bounding box of a fresh facility (x_min, x_max, y_min, y_max).
pub const DEFAULT_PHYSICAL_BOUNDS: (f64, f64, f64, f64) = (0.0, 1000.0, 0.0, 600.0);

/// Blob store key holding the working copy.
pub const DRAFT_KEY: &str = "draft";

/// Blob store key read by the viewer.
pub const PUBLISHED_KEY: &str = "published";

/// Name given to the floor of a fresh document.
pub const DEFAULT_FLOOR_NAME: &str = "Ground Floor";

/// Placeholder text for labels created with the label tool.
pub const DEFAULT_LABEL_TEXT: &str = "New label";

/// Font size for labels created with the label tool.
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 14.0;
