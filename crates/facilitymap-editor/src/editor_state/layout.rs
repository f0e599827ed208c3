//! Bulk layout edits: starter templates and CSV pin import.

use facilitymap_core::EditorError;
use tracing::info;

use super::EditorState;
use crate::import::{parse_pin_csv, PinImport};
use crate::model::FloorId;
use crate::templates::{apply_template, find_template};

impl EditorState {
    /// Whether applying a template to the active floor would replace drawn
    /// content. Callers confirm with the user when this is `true`.
    pub fn active_floor_has_layout_content(&self) -> bool {
        self.active_floor().has_layout_content()
    }

    /// Replaces the active floor's layout with a catalog template.
    pub fn apply_template(&mut self, template_id: &str) -> Result<(), EditorError> {
        let template = find_template(template_id).ok_or_else(|| EditorError::UnknownTemplate {
            template_id: template_id.to_string(),
        })?;
        let floor = apply_template(self.active_floor(), template);
        self.commit_floor(floor)?;
        info!(template = template.id, "Applied template");
        Ok(())
    }

    /// Parses CSV and merges its valid rows into the pins of `floor_id`.
    ///
    /// The returned import lists every row, including rejected ones. History
    /// only records an entry when at least one row was valid.
    pub fn import_pins(&mut self, floor_id: FloorId, csv: &str) -> Result<PinImport, EditorError> {
        let floor = self
            .document()
            .floor(floor_id)
            .ok_or_else(|| EditorError::FloorNotFound {
                floor_id: floor_id.to_string(),
            })?;
        let import = parse_pin_csv(csv);
        if import.valid_count() > 0 {
            let next = import.apply(floor);
            self.commit_floor(next)?;
        }
        info!(
            valid = import.valid_count(),
            invalid = import.invalid_count(),
            "Imported pins"
        );
        Ok(import)
    }
}
