//! Floor management for the editor session.

use facilitymap_core::EditorError;
use tracing::debug;

use super::EditorState;
use crate::model::{Floor, FloorId};

impl EditorState {
    /// Appends a new empty floor and makes it active.
    pub fn add_floor(&mut self, name: impl Into<String>) -> FloorId {
        let floor = Floor::new(name);
        let id = floor.id;
        debug!(floor = %floor.name, "Adding floor");
        let document = self.document().with_added_floor(floor);
        self.commit(document);
        self.activate(id);
        id
    }

    pub fn rename_floor(&mut self, id: FloorId, name: impl Into<String>) -> Result<(), EditorError> {
        let mut floor = self.floor_or_err(id)?.clone();
        floor.name = name.into();
        self.commit_floor(floor)
    }

    /// Sets or clears the backdrop image reference of a floor.
    pub fn set_background_image(
        &mut self,
        id: FloorId,
        image: Option<String>,
    ) -> Result<(), EditorError> {
        let mut floor = self.floor_or_err(id)?.clone();
        floor.background_image = image;
        self.commit_floor(floor)
    }

    /// Deletes a floor. The last remaining floor cannot be deleted; returns
    /// `false` and changes nothing in that case or for an unknown id.
    /// Deleting the active floor activates the first remaining one.
    pub fn delete_floor(&mut self, id: FloorId) -> bool {
        let Some(document) = self.document().without_floor(id) else {
            debug!(floor = %id, "Refusing to delete floor");
            return false;
        };
        self.commit(document);
        true
    }

    /// Moves a floor to a new display position. Returns `false` if nothing moved.
    pub fn move_floor(&mut self, id: FloorId, new_index: usize) -> bool {
        match self.document().with_floor_moved(id, new_index) {
            Some(document) => {
                self.commit(document);
                true
            }
            None => false,
        }
    }

    /// Switches the floor being edited. Not an edit; history is untouched.
    pub fn set_active_floor(&mut self, id: FloorId) -> Result<(), EditorError> {
        self.floor_or_err(id)?;
        self.activate(id);
        Ok(())
    }

    pub fn floor_by_name(&self, name: &str) -> Option<&Floor> {
        self.document()
            .floors()
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    fn activate(&mut self, id: FloorId) {
        if self.active_floor == id {
            return;
        }
        self.active_floor = id;
        self.canvas.set_tool(self.canvas.tool());
        self.canvas.clear_selection();
    }

    fn floor_or_err(&self, id: FloorId) -> Result<&Floor, EditorError> {
        self.document()
            .floor(id)
            .ok_or_else(|| EditorError::FloorNotFound {
                floor_id: id.to_string(),
            })
    }
}
