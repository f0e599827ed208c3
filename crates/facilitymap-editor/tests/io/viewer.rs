use facilitymap_editor::{
    EditorState, MemoryBlobStore, Point, PublishedViewer, Selection, Tool,
};

#[test]
fn test_viewer_needs_a_publish() {
    let store = MemoryBlobStore::new();
    let state = EditorState::default();
    state.save(&store).unwrap();
    assert!(PublishedViewer::open(&store).is_none());
}

#[test]
fn test_viewer_shows_published_layout() {
    let store = MemoryBlobStore::new();
    let mut state = EditorState::default();
    state.set_tool(Tool::Label);
    state.pointer_down(Point::new(100.0, 100.0));
    let upper = state.add_floor("Upper");
    state.publish(&store).unwrap();

    let mut viewer = PublishedViewer::open(&store).expect("published snapshot");
    assert_eq!(viewer.floors().len(), 2);
    assert_eq!(viewer.active_floor().labels.len(), 1);
    assert!(matches!(
        viewer.inspect(Point::new(102.0, 104.0), 6.0),
        Some(Selection::Label(_))
    ));

    assert!(viewer.show_floor(upper));
    assert_eq!(viewer.active_floor().name, "Upper");
    assert!(viewer.inspect(Point::new(102.0, 104.0), 6.0).is_none());
}
