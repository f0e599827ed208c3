//! The document root: an ordered list of floors.

use facilitymap_core::constants::DEFAULT_FLOOR_NAME;
use facilitymap_core::EditorError;
use serde::{Deserialize, Serialize};

use super::{Floor, FloorId};

/// Root aggregate. Always holds at least one floor; insertion order is
/// display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    floors: Vec<Floor>,
}

impl Document {
    /// Creates a document with a single empty floor.
    pub fn new() -> Self {
        Self {
            floors: vec![Floor::new(DEFAULT_FLOOR_NAME)],
        }
    }

    /// Builds a document from floors, or `None` if the list is empty.
    pub fn from_floors(floors: Vec<Floor>) -> Option<Self> {
        if floors.is_empty() {
            None
        } else {
            Some(Self { floors })
        }
    }

    /// Decodes a stored blob. A document without floors is rejected.
    pub fn from_json(blob: &str) -> serde_json::Result<Self> {
        let doc: Document = serde_json::from_str(blob)?;
        if doc.floors.is_empty() {
            return Err(serde::de::Error::custom("document has no floors"));
        }
        Ok(doc)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// First floor in display order. Always present.
    pub fn first_floor(&self) -> &Floor {
        &self.floors[0]
    }

    pub fn floor(&self, id: FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == id)
    }

    pub fn floor_index(&self, id: FloorId) -> Option<usize> {
        self.floors.iter().position(|f| f.id == id)
    }

    /// Returns a document with `floor` replacing the floor of the same id.
    pub fn with_floor(&self, floor: Floor) -> Result<Self, EditorError> {
        let index = self
            .floor_index(floor.id)
            .ok_or_else(|| EditorError::FloorNotFound {
                floor_id: floor.id.to_string(),
            })?;
        let mut next = self.clone();
        next.floors[index] = floor;
        Ok(next)
    }

    /// Returns a document with `floor` appended.
    pub fn with_added_floor(&self, floor: Floor) -> Self {
        let mut next = self.clone();
        next.floors.push(floor);
        next
    }

    /// Returns a document without the given floor, or `None` when it is the
    /// last floor or does not exist.
    pub fn without_floor(&self, id: FloorId) -> Option<Self> {
        if self.floors.len() <= 1 {
            return None;
        }
        let index = self.floor_index(id)?;
        let mut next = self.clone();
        next.floors.remove(index);
        Some(next)
    }

    /// Returns a document with the floor moved to `new_index` (clamped).
    pub fn with_floor_moved(&self, id: FloorId, new_index: usize) -> Option<Self> {
        let index = self.floor_index(id)?;
        let target = new_index.min(self.floors.len() - 1);
        if index == target {
            return None;
        }
        let mut next = self.clone();
        let floor = next.floors.remove(index);
        next.floors.insert(target, floor);
        Some(next)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
