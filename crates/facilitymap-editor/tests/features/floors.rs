use facilitymap_core::EditorError;
use facilitymap_editor::{EditorState, FloorId, Point, Tool};

#[test]
fn test_last_floor_cannot_be_deleted() {
    let mut state = EditorState::default();
    let only = state.active_floor_id();

    assert!(!state.delete_floor(only));
    assert_eq!(state.document().floor_count(), 1);
    assert!(!state.can_undo());
}

#[test]
fn test_deleting_active_floor_activates_first_remaining() {
    let mut state = EditorState::default();
    let ground = state.active_floor_id();
    let mezzanine = state.add_floor("Mezzanine");
    let roof = state.add_floor("Roof");
    assert_eq!(state.active_floor_id(), roof);

    state.set_active_floor(mezzanine).unwrap();
    assert!(state.delete_floor(mezzanine));
    assert_eq!(state.active_floor_id(), ground);

    state.set_active_floor(ground).unwrap();
    assert!(state.delete_floor(ground));
    assert_eq!(state.active_floor_id(), roof);
    assert!(!state.delete_floor(roof));
}

#[test]
fn test_delete_unknown_floor() {
    let mut state = EditorState::default();
    state.add_floor("Second");
    assert!(!state.delete_floor(FloorId::new()));
    assert_eq!(state.document().floor_count(), 2);
}

#[test]
fn test_rename_and_background() {
    let mut state = EditorState::default();
    let id = state.active_floor_id();
    state.rename_floor(id, "Shop Floor").unwrap();
    state
        .set_background_image(id, Some("survey-2024.png".into()))
        .unwrap();
    assert_eq!(state.active_floor().name, "Shop Floor");
    assert_eq!(
        state.active_floor().background_image.as_deref(),
        Some("survey-2024.png")
    );

    state.undo();
    assert_eq!(state.active_floor().background_image, None);
    assert_eq!(state.floor_by_name("shop floor").map(|f| f.id), Some(id));
}

#[test]
fn test_unknown_floor_is_an_error() {
    let mut state = EditorState::default();
    let stranger = FloorId::new();
    assert!(matches!(
        state.rename_floor(stranger, "x"),
        Err(EditorError::FloorNotFound { .. })
    ));
    assert!(matches!(
        state.set_active_floor(stranger),
        Err(EditorError::FloorNotFound { .. })
    ));
}

#[test]
fn test_reorder_floors() {
    let mut state = EditorState::default();
    state.add_floor("B");
    let c = state.add_floor("C");
    assert!(state.move_floor(c, 0));
    let names: Vec<_> = state
        .document()
        .floors()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["C", "Ground Floor", "B"]);
    assert!(!state.move_floor(c, 0));
}

#[test]
fn test_switching_floor_abandons_drawing() {
    let mut state = EditorState::default();
    let ground = state.active_floor_id();
    state.add_floor("Upper");

    state.set_tool(Tool::Zone);
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_down(Point::new(10.0, 0.0));
    state.set_active_floor(ground).unwrap();
    assert!(state.draft_points().is_empty());
    assert_eq!(state.tool(), Tool::Zone);
}

#[test]
fn test_edits_land_on_active_floor_only() {
    let mut state = EditorState::default();
    let ground = state.active_floor_id();
    let upper = state.add_floor("Upper");

    state.set_tool(Tool::Label);
    state.pointer_down(Point::new(50.0, 50.0));

    let doc = state.document();
    assert_eq!(doc.floor(upper).map(|f| f.labels.len()), Some(1));
    assert_eq!(doc.floor(ground).map(|f| f.labels.len()), Some(0));
}
