//! # FacilityMap
//!
//! Editor for 2D facility floor plans: zones, walls, material-flow arrows,
//! labels, equipment placements and asset pins, organized by floor, with a
//! working draft and a published snapshot for read-only viewers.
//!
//! ## Architecture
//!
//! FacilityMap is organized as a workspace with multiple crates:
//!
//! 1. **facilitymap-core** - Error types, shared constants, shared-state aliases
//! 2. **facilitymap-settings** - Configuration files (TOML/JSON) and validation
//! 3. **facilitymap-editor** - Document model, history, tools, CSV import,
//!    templates, persistence and the published viewer
//! 4. **facilitymap** - This crate: logging setup and the command-line tool

pub use facilitymap_core::{EditorError, Error, Result, StorageError};
pub use facilitymap_editor as editor;
pub use facilitymap_editor::{
    Document, EditorOptions, EditorState, FileBlobStore, Floor, FloorId, PublishedViewer,
};
pub use facilitymap_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Editor session options derived from the user's configuration.
pub fn editor_options(config: &Config) -> EditorOptions {
    let b = config.canvas.bounds;
    EditorOptions {
        grid_size: config.editor.grid_size,
        snap_enabled: config.editor.snap_enabled,
        history_depth: config.editor.history_depth,
        hit_tolerance: config.editor.hit_tolerance,
        bounds: (b.x_min, b.x_max, b.y_min, b.y_max),
        render_scale: config.canvas.scale,
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
