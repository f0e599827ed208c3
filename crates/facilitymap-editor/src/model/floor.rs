//! A single floor and its entity collections.

use serde::{Deserialize, Serialize};

use super::{
    AssetPin, EntityId, EquipmentPlacement, Flow, FloorId, Label, Point, Selection, Wall, Zone,
};

/// One level of the facility.
///
/// Entity ids come from `next_id`, which only ever grows, so an id is never
/// handed out twice on the same floor even after the entity is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub flows: Vec<Flow>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub pins: Vec<AssetPin>,
    #[serde(default)]
    pub equipment: Vec<EquipmentPlacement>,
    #[serde(default = "first_entity_id")]
    next_id: u64,
}

fn first_entity_id() -> u64 {
    1
}

impl Floor {
    /// Creates an empty floor with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FloorId::new(),
            name: name.into(),
            background_image: None,
            zones: Vec::new(),
            walls: Vec::new(),
            flows: Vec::new(),
            labels: Vec::new(),
            pins: Vec::new(),
            equipment: Vec::new(),
            next_id: first_entity_id(),
        }
    }

    /// Allocates the next entity id.
    pub fn allocate_id(&mut self) -> EntityId {
        // Guard against blobs whose counter lags behind their content.
        let floor = self.max_entity_id().map_or(0, |id| id.0 + 1);
        let id = self.next_id.max(floor);
        self.next_id = id + 1;
        EntityId(id)
    }

    fn max_entity_id(&self) -> Option<EntityId> {
        self.zones
            .iter()
            .map(|z| z.id)
            .chain(self.walls.iter().map(|w| w.id))
            .chain(self.flows.iter().map(|f| f.id))
            .chain(self.labels.iter().map(|l| l.id))
            .chain(self.equipment.iter().map(|e| e.id))
            .max()
    }

    /// Whether applying a template would destroy drawn content.
    pub fn has_layout_content(&self) -> bool {
        !(self.zones.is_empty()
            && self.walls.is_empty()
            && self.flows.is_empty()
            && self.labels.is_empty())
    }

    /// Total entity count across all collections.
    pub fn entity_count(&self) -> usize {
        self.zones.len()
            + self.walls.len()
            + self.flows.len()
            + self.labels.len()
            + self.pins.len()
            + self.equipment.len()
    }

    pub fn zone(&self, id: EntityId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn zone_mut(&mut self, id: EntityId) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id == id)
    }

    pub fn wall(&self, id: EntityId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn wall_mut(&mut self, id: EntityId) -> Option<&mut Wall> {
        self.walls.iter_mut().find(|w| w.id == id)
    }

    pub fn flow(&self, id: EntityId) -> Option<&Flow> {
        self.flows.iter().find(|f| f.id == id)
    }

    pub fn flow_mut(&mut self, id: EntityId) -> Option<&mut Flow> {
        self.flows.iter_mut().find(|f| f.id == id)
    }

    pub fn label(&self, id: EntityId) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    pub fn label_mut(&mut self, id: EntityId) -> Option<&mut Label> {
        self.labels.iter_mut().find(|l| l.id == id)
    }

    pub fn pin(&self, asset_id: &str) -> Option<&AssetPin> {
        self.pins.iter().find(|p| p.asset_id == asset_id)
    }

    pub fn pin_mut(&mut self, asset_id: &str) -> Option<&mut AssetPin> {
        self.pins.iter_mut().find(|p| p.asset_id == asset_id)
    }

    pub fn equipment(&self, id: EntityId) -> Option<&EquipmentPlacement> {
        self.equipment.iter().find(|e| e.id == id)
    }

    pub fn equipment_mut(&mut self, id: EntityId) -> Option<&mut EquipmentPlacement> {
        self.equipment.iter_mut().find(|e| e.id == id)
    }

    /// Whether the selection still resolves to an entity on this floor.
    pub fn contains(&self, selection: &Selection) -> bool {
        match selection {
            Selection::Zone(id) => self.zone(*id).is_some(),
            Selection::Wall(id) => self.wall(*id).is_some(),
            Selection::Flow(id) => self.flow(*id).is_some(),
            Selection::Label(id) => self.label(*id).is_some(),
            Selection::Pin(asset_id) => self.pin(asset_id).is_some(),
            Selection::Equipment(id) => self.equipment(*id).is_some(),
        }
    }

    /// Removes the selected entity. Returns `false` if it was not present.
    pub fn remove(&mut self, selection: &Selection) -> bool {
        fn drop_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
            let before = items.len();
            items.retain(|item| !pred(item));
            items.len() != before
        }

        match selection {
            Selection::Zone(id) => drop_where(&mut self.zones, |z| z.id == *id),
            Selection::Wall(id) => drop_where(&mut self.walls, |w| w.id == *id),
            Selection::Flow(id) => drop_where(&mut self.flows, |f| f.id == *id),
            Selection::Label(id) => drop_where(&mut self.labels, |l| l.id == *id),
            Selection::Pin(asset_id) => drop_where(&mut self.pins, |p| &p.asset_id == asset_id),
            Selection::Equipment(id) => drop_where(&mut self.equipment, |e| e.id == *id),
        }
    }

    /// Places a pin for `asset_id`, moving the existing pin if there is one.
    pub fn place_pin(&mut self, asset_id: &str, position: Point) {
        match self.pin_mut(asset_id) {
            Some(pin) => pin.position = position,
            None => self.pins.push(AssetPin::new(asset_id, position)),
        }
    }

    /// Topmost entity under `p`. Markers sit above drawn geometry and zones
    /// are the backdrop; within a collection later entries draw on top.
    pub fn hit_test(&self, p: &Point, tolerance: f64) -> Option<Selection> {
        if let Some(pin) = self.pins.iter().rev().find(|pin| pin.contains_point(p, tolerance)) {
            return Some(Selection::Pin(pin.asset_id.clone()));
        }
        if let Some(eq) = self
            .equipment
            .iter()
            .rev()
            .find(|eq| eq.contains_point(p, tolerance))
        {
            return Some(Selection::Equipment(eq.id));
        }
        if let Some(label) = self
            .labels
            .iter()
            .rev()
            .find(|label| label.contains_point(p, tolerance))
        {
            return Some(Selection::Label(label.id));
        }
        if let Some(flow) = self.flows.iter().rev().find(|f| f.distance_to(p) <= tolerance) {
            return Some(Selection::Flow(flow.id));
        }
        if let Some(wall) = self.walls.iter().rev().find(|w| w.distance_to(p) <= tolerance) {
            return Some(Selection::Wall(wall.id));
        }
        self.zones
            .iter()
            .rev()
            .find(|z| z.contains_point(p))
            .map(|z| Selection::Zone(z.id))
    }

    /// Vertex list of a polyline/polygon selection, if it has one.
    pub fn vertices(&self, selection: &Selection) -> Option<&[Point]> {
        match selection {
            Selection::Zone(id) => self.zone(*id).map(|z| z.points.as_slice()),
            Selection::Wall(id) => self.wall(*id).map(|w| w.points.as_slice()),
            Selection::Flow(id) => self.flow(*id).map(|f| f.points.as_slice()),
            _ => None,
        }
    }

    /// Mutable vertex list of a polyline/polygon selection.
    pub fn vertices_mut(&mut self, selection: &Selection) -> Option<&mut Vec<Point>> {
        match selection {
            Selection::Zone(id) => self.zone_mut(*id).map(|z| &mut z.points),
            Selection::Wall(id) => self.wall_mut(*id).map(|w| &mut w.points),
            Selection::Flow(id) => self.flow_mut(*id).map(|f| &mut f.points),
            _ => None,
        }
    }

    /// Anchor of a point-like selection (label, pin, equipment).
    pub fn anchor(&self, selection: &Selection) -> Option<Point> {
        match selection {
            Selection::Label(id) => self.label(*id).map(|l| l.position),
            Selection::Pin(asset_id) => self.pin(asset_id).map(|p| p.position),
            Selection::Equipment(id) => self.equipment(*id).map(|e| e.center),
            _ => None,
        }
    }

    /// Moves the anchor of a point-like selection.
    pub fn set_anchor(&mut self, selection: &Selection, position: Point) -> bool {
        match selection {
            Selection::Label(id) => self.label_mut(*id).map(|l| l.position = position),
            Selection::Pin(asset_id) => self.pin_mut(asset_id).map(|p| p.position = position),
            Selection::Equipment(id) => self.equipment_mut(*id).map(|e| e.center = position),
            _ => None,
        }
        .is_some()
    }
}
