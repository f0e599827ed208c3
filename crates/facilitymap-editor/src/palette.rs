//! Asset registry and equipment icon library as seen by the editor.
//!
//! Both collaborators are read-only. The palette only needs them for
//! drag sources and for resolving a pin's asset id to a display name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Floor;

/// Registry entry for a physical asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
}

/// Entry of the equipment icon manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentIcon {
    pub block_name: String,
    pub display_name: String,
    #[serde(default)]
    pub category: String,
    pub width_units: f64,
    pub height_units: f64,
}

/// Assets and equipment icons available for dropping onto the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    assets: Vec<Asset>,
    icons: Vec<EquipmentIcon>,
}

impl Palette {
    pub fn new(assets: Vec<Asset>, icons: Vec<EquipmentIcon>) -> Self {
        Self { assets, icons }
    }

    /// Builds a palette from the registry's asset list and the icon manifest,
    /// both JSON arrays.
    pub fn from_json(assets_json: &str, icons_json: &str) -> serde_json::Result<Self> {
        let assets: Vec<Asset> = serde_json::from_str(assets_json)?;
        let icons: Vec<EquipmentIcon> = serde_json::from_str(icons_json)?;
        tracing::debug!(
            assets = assets.len(),
            icons = icons.len(),
            "Loaded palette"
        );
        Ok(Self { assets, icons })
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn icons(&self) -> &[EquipmentIcon] {
        &self.icons
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Display name for a pin's asset, falling back to the raw id.
    pub fn asset_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.asset(id).map_or(id, |a| a.name.as_str())
    }

    pub fn icon(&self, block_name: &str) -> Option<&EquipmentIcon> {
        self.icons.iter().find(|i| i.block_name == block_name)
    }

    /// Assets grouped by category, categories sorted.
    pub fn assets_by_category(&self) -> BTreeMap<&str, Vec<&Asset>> {
        let mut groups: BTreeMap<&str, Vec<&Asset>> = BTreeMap::new();
        for asset in &self.assets {
            groups.entry(asset.category.as_str()).or_default().push(asset);
        }
        groups
    }

    /// Icons grouped by category, categories sorted.
    pub fn icons_by_category(&self) -> BTreeMap<&str, Vec<&EquipmentIcon>> {
        let mut groups: BTreeMap<&str, Vec<&EquipmentIcon>> = BTreeMap::new();
        for icon in &self.icons {
            groups.entry(icon.category.as_str()).or_default().push(icon);
        }
        groups
    }

    /// Assets that have no pin on `floor` yet.
    pub fn unplaced_assets<'a>(&'a self, floor: &Floor) -> Vec<&'a Asset> {
        self.assets
            .iter()
            .filter(|a| floor.pin(&a.id).is_none())
            .collect()
    }

    pub fn contains_asset(&self, id: &str) -> bool {
        self.asset(id).is_some()
    }
}
