//! # FacilityMap Editor
//!
//! Editing core for 2D facility floor plans: zones, walls, material-flow
//! arrows, labels, equipment placements and asset pins, organized in floors
//! and published for read-only viewing.
//!
//! ## Core Components
//!
//! - **Model**: `Document` → `Floor` → entities, with stable per-floor ids
//! - **History**: bounded linear undo/redo over whole-document snapshots
//! - **Transform**: physical survey space (Y-up) ↔ render space (Y-down)
//! - **Snap**: grid quantization
//! - **Canvas**: tool state machine turning pointer events into new floors
//! - **Import**: `asset_id,x,y` CSV pin import with per-row validation
//! - **Templates**: fixed catalog of starter layouts
//! - **Persistence**: `draft`/`published` blobs, autosave, publish
//! - **Viewer**: read-only access to the published snapshot
//!
//! ## Architecture
//!
//! ```text
//! input ──► Canvas ──► new Floor ──► EditHistory::set ──► Document
//!                                                           │
//!                                       autosave / save / publish
//!                                                           ▼
//!                                                      BlobStore
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use facilitymap_editor::{EditorOptions, EditorState, Point, Tool};
//!
//! let mut editor = EditorState::new(EditorOptions::default());
//! editor.set_tool(Tool::Zone);
//! editor.pointer_down(Point::new(0.0, 0.0));
//! editor.pointer_down(Point::new(100.0, 0.0));
//! editor.double_click(Point::new(100.0, 100.0));
//! assert_eq!(editor.active_floor().zones.len(), 1);
//! editor.undo();
//! ```

pub mod canvas;
pub mod editor_state;
pub mod history;
pub mod import;
pub mod model;
pub mod palette;
pub mod persistence;
pub mod shortcuts;
pub mod snap;
pub mod templates;
pub mod transform;
pub mod viewer;

pub use canvas::{Canvas, CanvasOutcome, DragHandle, PaletteItem, Tool};
pub use editor_state::{EditorOptions, EditorState};
pub use history::EditHistory;
pub use import::{merge_pins, parse_pin_csv, ImportRow, PinImport, PinRow, RowError};
pub use model::{
    AssetPin, Document, EntityId, EquipmentPlacement, Floor, FloorId, Flow, Label, LineStyle,
    PinShape, PinSize, Point, Selection, Wall, Zone,
};
pub use palette::{Asset, EquipmentIcon, Palette};
pub use persistence::{
    autosave, load_document, load_published, publish, save_draft, spawn_autosave,
    AutosaveHandle, Autosaver, BlobStore, FileBlobStore, MemoryBlobStore, PublishReceipt,
};
pub use shortcuts::{EditorAction, Key, KeyInput};
pub use snap::SnapEngine;
pub use templates::{apply_template, find_template, templates, LayoutTemplate, TemplateZone};
pub use transform::CoordinateTransform;
pub use viewer::PublishedViewer;
