//! Property setters for entities on the active floor.
//!
//! Each setter is one history entry. Entity lookups that fail return
//! `EditorError::EntityNotFound`.

use facilitymap_core::EditorError;
use tracing::{debug, info};

use super::EditorState;
use crate::model::{EntityId, LineStyle, PinShape, PinSize, Selection};
use crate::palette::Palette;

impl EditorState {
    pub fn rename_zone(&mut self, id: EntityId, name: impl Into<String>) -> Result<(), EditorError> {
        let name = name.into();
        self.edit_active_floor(Selection::Zone(id), |floor| {
            floor.zone_mut(id).map(|z| z.name = name).is_some()
        })
    }

    pub fn set_zone_color(&mut self, id: EntityId, color: impl Into<String>) -> Result<(), EditorError> {
        let color = color.into();
        self.edit_active_floor(Selection::Zone(id), |floor| {
            floor.zone_mut(id).map(|z| z.color = color).is_some()
        })
    }

    pub fn set_wall_style(&mut self, id: EntityId, style: LineStyle) -> Result<(), EditorError> {
        self.edit_active_floor(Selection::Wall(id), |floor| {
            floor.wall_mut(id).map(|w| w.style = style).is_some()
        })
    }

    /// Sets or clears the text shown along a flow arrow.
    pub fn set_flow_label(&mut self, id: EntityId, label: Option<String>) -> Result<(), EditorError> {
        self.edit_active_floor(Selection::Flow(id), |floor| {
            floor.flow_mut(id).map(|f| f.label = label).is_some()
        })
    }

    pub fn set_flow_color(&mut self, id: EntityId, color: impl Into<String>) -> Result<(), EditorError> {
        let color = color.into();
        self.edit_active_floor(Selection::Flow(id), |floor| {
            floor.flow_mut(id).map(|f| f.color = color).is_some()
        })
    }

    pub fn set_label_text(&mut self, id: EntityId, text: impl Into<String>) -> Result<(), EditorError> {
        let text = text.into();
        self.edit_active_floor(Selection::Label(id), |floor| {
            floor.label_mut(id).map(|l| l.text = text).is_some()
        })
    }

    /// Font size must be a positive, finite number.
    pub fn set_label_font_size(&mut self, id: EntityId, font_size: f64) -> Result<(), EditorError> {
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(invalid_value("font_size", font_size));
        }
        self.edit_active_floor(Selection::Label(id), |floor| {
            floor.label_mut(id).map(|l| l.font_size = font_size).is_some()
        })
    }

    pub fn set_pin_style(
        &mut self,
        asset_id: &str,
        shape: PinShape,
        size: PinSize,
    ) -> Result<(), EditorError> {
        self.edit_active_floor(Selection::Pin(asset_id.to_string()), |floor| {
            floor
                .pin_mut(asset_id)
                .map(|p| {
                    p.shape = shape;
                    p.size = size;
                })
                .is_some()
        })
    }

    /// Sets equipment rotation, normalized to `[0, 360)`.
    pub fn set_equipment_rotation(&mut self, id: EntityId, degrees: f64) -> Result<(), EditorError> {
        if !degrees.is_finite() {
            return Err(invalid_value("rotation_deg", degrees));
        }
        let degrees = degrees.rem_euclid(360.0);
        self.edit_active_floor(Selection::Equipment(id), |floor| {
            floor
                .equipment_mut(id)
                .map(|e| e.rotation_deg = degrees)
                .is_some()
        })
    }

    /// Binds a placement to an asset, or unbinds it with `None`.
    pub fn bind_equipment_asset(
        &mut self,
        id: EntityId,
        asset_id: Option<String>,
    ) -> Result<(), EditorError> {
        self.edit_active_floor(Selection::Equipment(id), |floor| {
            floor.equipment_mut(id).map(|e| e.asset_id = asset_id).is_some()
        })
    }

    /// Deletes the selected entity. Returns `false` when nothing is selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(selection) = self.canvas.selection().cloned() else {
            return false;
        };
        let mut floor = self.active_floor().clone();
        if !floor.remove(&selection) {
            self.canvas.clear_selection();
            return false;
        }
        debug!(%selection, "Deleting selection");
        self.canvas.clear_selection();
        self.commit_floor(floor).is_ok()
    }

    /// Unbinds equipment whose asset no longer exists in the registry. The
    /// placements themselves stay. Returns how many were unbound; all floors
    /// change in one history entry.
    pub fn unbind_missing_assets(&mut self, palette: &Palette) -> usize {
        let mut unbound = 0;
        let mut floors = self.document().floors().to_vec();
        for floor in &mut floors {
            for placement in &mut floor.equipment {
                let missing = placement
                    .asset_id
                    .as_deref()
                    .is_some_and(|asset| !palette.contains_asset(asset));
                if missing {
                    placement.asset_id = None;
                    unbound += 1;
                }
            }
        }

        if unbound > 0 {
            if let Some(document) = crate::model::Document::from_floors(floors) {
                info!(unbound, "Unbound equipment from missing assets");
                self.commit(document);
            }
        }
        unbound
    }
}

fn invalid_value(field: &str, value: f64) -> EditorError {
    EditorError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}
