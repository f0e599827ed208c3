//! FacilityMap Settings Crate
//!
//! Handles editor configuration: grid and snapping, history depth, the
//! physical-to-render transform, and where drafts are stored.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, EditorSettings, PhysicalBounds, StorageSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
