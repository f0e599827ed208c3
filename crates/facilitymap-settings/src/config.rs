//! Configuration management for FacilityMap
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (grid, snapping, history depth, hit tolerance)
//! - Canvas settings (physical bounds and render scale)
//! - Storage settings (blob directory, autosave interval)

use crate::error::{ConfigError, SettingsResult};
use facilitymap_core::constants::{
    DEFAULT_AUTOSAVE_INTERVAL_SECS, DEFAULT_GRID_SIZE, DEFAULT_HISTORY_DEPTH,
    DEFAULT_HIT_TOLERANCE, DEFAULT_PHYSICAL_BOUNDS, DEFAULT_RENDER_SCALE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Editing behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing for snapping, in document units
    pub grid_size: f64,
    /// Whether drawing and dragging snap to the grid
    pub snap_enabled: bool,
    /// Number of undo steps kept
    pub history_depth: usize,
    /// Pick distance for selecting entities
    pub hit_tolerance: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snap_enabled: true,
            history_depth: DEFAULT_HISTORY_DEPTH,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }
}

/// Physical survey-space extent of the facility (Y-up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for PhysicalBounds {
    fn default() -> Self {
        let (x_min, x_max, y_min, y_max) = DEFAULT_PHYSICAL_BOUNDS;
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// Canvas mapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Render units per physical unit
    pub scale: f64,
    /// Physical bounding box
    pub bounds: PhysicalBounds,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            scale: DEFAULT_RENDER_SCALE,
            bounds: PhysicalBounds::default(),
        }
    }
}

/// Draft/publish storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the `draft` and `published` blobs
    pub directory: PathBuf,
    /// Seconds between autosaves
    pub autosave_interval_secs: u64,
}

impl StorageSettings {
    /// Autosave interval as a `Duration`.
    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_interval_secs)
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            directory: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("facilitymap"),
            autosave_interval_secs: DEFAULT_AUTOSAVE_INTERVAL_SECS,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Editor behaviour
    #[serde(default)]
    pub editor: EditorSettings,
    /// Canvas mapping
    #[serde(default)]
    pub canvas: CanvasSettings,
    /// Storage
    #[serde(default)]
    pub storage: StorageSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/facilitymap/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("facilitymap").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load config from file, falling back to defaults if the file is missing.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let editor = &self.editor;
        if !(editor.grid_size.is_finite() && editor.grid_size > 0.0) {
            return Err(out_of_range("editor.grid_size", editor.grid_size));
        }
        if editor.history_depth == 0 {
            return Err(out_of_range("editor.history_depth", editor.history_depth));
        }
        if !(editor.hit_tolerance.is_finite() && editor.hit_tolerance >= 0.0) {
            return Err(out_of_range("editor.hit_tolerance", editor.hit_tolerance));
        }

        let canvas = &self.canvas;
        if !(canvas.scale.is_finite() && canvas.scale > 0.0) {
            return Err(out_of_range("canvas.scale", canvas.scale));
        }
        let b = canvas.bounds;
        if !(b.x_max > b.x_min) {
            return Err(out_of_range("canvas.bounds.x_max", b.x_max));
        }
        if !(b.y_max > b.y_min) {
            return Err(out_of_range("canvas.bounds.y_max", b.y_max));
        }

        if self.storage.autosave_interval_secs == 0 {
            return Err(out_of_range(
                "storage.autosave_interval_secs",
                self.storage.autosave_interval_secs,
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
