use facilitymap_core::EditorError;
use facilitymap_editor::{
    apply_template, find_template, templates, EditorState, EquipmentIcon, Floor, PaletteItem,
    Point, Tool,
};

#[test]
fn test_catalog_contents() {
    let ids: Vec<_> = templates().iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec!["linear-flow", "u-shape", "l-shape", "cellular", "open-warehouse"]
    );
    assert_eq!(find_template("linear-flow").map(|t| t.zones.len()), Some(4));
    assert_eq!(find_template("u-shape").map(|t| t.zones.len()), Some(3));
    assert!(find_template("spiral").is_none());
}

#[test]
fn test_template_preserves_pins_and_equipment() {
    let mut floor = Floor::new("Ground");
    floor.place_pin("CNC-01", Point::new(10.0, 10.0));
    floor.place_pin("CNC-02", Point::new(20.0, 20.0));

    let mut state = EditorState::with_document(
        facilitymap_editor::Document::from_floors(vec![floor]).unwrap(),
        Default::default(),
    );
    state.drop_item(
        &PaletteItem::Equipment {
            icon: EquipmentIcon {
                block_name: "rack".into(),
                display_name: "Rack".into(),
                category: "storage".into(),
                width_units: 10.0,
                height_units: 40.0,
            },
            asset_id: None,
        },
        Point::new(500.0, 300.0),
    );
    let pins_before = state.active_floor().pins.clone();
    let equipment_before = state.active_floor().equipment.clone();

    state.apply_template("u-shape").unwrap();

    let floor = state.active_floor();
    assert_eq!(floor.zones.len(), 3);
    assert_eq!(floor.pins, pins_before);
    assert_eq!(floor.equipment, equipment_before);
}

#[test]
fn test_template_replaces_layout() {
    let mut state = EditorState::default();
    state.set_tool(Tool::Wall);
    state.pointer_down(Point::new(0.0, 0.0));
    state.double_click(Point::new(100.0, 0.0));
    state.set_tool(Tool::Label);
    state.pointer_down(Point::new(50.0, 50.0));
    assert!(state.active_floor_has_layout_content());

    state.apply_template("linear-flow").unwrap();
    let floor = state.active_floor();
    assert!(floor.walls.is_empty());
    assert!(floor.labels.is_empty());
    assert_eq!(floor.zones.len(), 4);
    assert!(floor.flows.is_empty());
    // The label selected before is gone with the old layout.
    assert_eq!(state.selection(), None);
}

#[test]
fn test_every_template_is_zones_only() {
    for template in templates() {
        let next = apply_template(&Floor::new("Ground"), template);
        assert_eq!(next.zones.len(), template.zones.len(), "{}", template.id);
        assert!(next.walls.is_empty(), "{}", template.id);
        assert!(next.flows.is_empty(), "{}", template.id);
        assert!(next.labels.is_empty(), "{}", template.id);
    }
}

#[test]
fn test_template_ids_do_not_collide_with_old_entities() {
    let mut floor = Floor::new("Ground");
    let template = find_template("cellular").unwrap();
    floor = apply_template(&floor, template);
    let first_ids: Vec<_> = floor.zones.iter().map(|z| z.id).collect();

    floor = apply_template(&floor, template);
    for zone in &floor.zones {
        assert!(!first_ids.contains(&zone.id));
    }
}

#[test]
fn test_unknown_template() {
    let mut state = EditorState::default();
    assert_eq!(
        state.apply_template("spiral"),
        Err(EditorError::UnknownTemplate {
            template_id: "spiral".into()
        })
    );
    assert!(!state.can_undo());
}

#[test]
fn test_empty_floor_has_no_layout_content() {
    let mut floor = Floor::new("Ground");
    floor.place_pin("A", Point::new(0.0, 0.0));
    assert!(!floor.has_layout_content());
}
