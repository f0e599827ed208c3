use facilitymap_editor::{
    merge_pins, parse_pin_csv, AssetPin, EditorState, Floor, ImportRow, PinShape, PinSize, Point,
    RowError,
};

#[test]
fn test_parse_with_header_and_crlf() {
    let csv = "asset_id,x,y\r\nCNC-01, 120.5, 40\r\n\r\nPK-01,300,75\r\n";
    let import = parse_pin_csv(csv);

    let rows: Vec<_> = import.valid_rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].asset_id, "CNC-01");
    assert_eq!(rows[0].position, Point::new(120.5, 40.0));
    assert_eq!(rows[1].asset_id, "PK-01");
    assert_eq!(import.invalid_count(), 0);
}

#[test]
fn test_parse_without_header() {
    let import = parse_pin_csv("A,1,2\nB,3,4");
    assert_eq!(import.valid_count(), 2);
    assert_eq!(import.rows()[0].line(), 1);
}

#[test]
fn test_invalid_rows_are_isolated_with_reasons() {
    let csv = "asset_id,x,y\nA,1,2\nB,1\n,5,5\nC,abc,3\nD,4,5\n";
    let import = parse_pin_csv(csv);

    assert_eq!(import.rows().len(), 5);
    assert_eq!(import.valid_count(), 2);

    let reasons: Vec<(usize, String)> = import
        .invalid_rows()
        .map(|row| match row {
            ImportRow::Invalid { line, reason, .. } => (*line, reason.to_string()),
            ImportRow::Valid { .. } => unreachable!(),
        })
        .collect();
    assert_eq!(
        reasons,
        vec![
            (3, "Expected 3 columns".to_string()),
            (4, "Missing asset_id".to_string()),
            (5, "x/y must be numbers".to_string()),
        ]
    );

    // Rows keep input order, valid and invalid interleaved.
    assert!(import.rows()[0].is_valid());
    assert!(import.rows()[4].is_valid());
}

#[test]
fn test_invalid_row_keeps_raw_text() {
    let import = parse_pin_csv("X,1");
    match &import.rows()[0] {
        ImportRow::Invalid { raw, reason, .. } => {
            assert_eq!(raw, "X,1");
            assert_eq!(*reason, RowError::ColumnCount);
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn test_extra_columns_are_ignored() {
    let import = parse_pin_csv("ast-001,285,145,\nast-002,450,145,Line 2\n");

    assert_eq!(import.invalid_count(), 0);
    let rows: Vec<_> = import.valid_rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].asset_id, "ast-001");
    assert_eq!(rows[0].position, Point::new(285.0, 145.0));
    assert_eq!(rows[1].asset_id, "ast-002");
    assert_eq!(rows[1].position, Point::new(450.0, 145.0));
}

#[test]
fn test_merge_replaces_by_identity() {
    let mut styled = AssetPin::new("A", Point::new(0.0, 0.0));
    styled.shape = PinShape::Square;
    styled.size = PinSize::Lg;
    let existing = vec![styled, AssetPin::new("B", Point::new(5.0, 5.0))];

    let import = parse_pin_csv("A,10,10\nC,20,20");
    let rows: Vec<_> = import.valid_rows().cloned().collect();
    let merged = merge_pins(&existing, &rows);

    let ids: Vec<_> = merged.iter().map(|p| p.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["B", "A", "C"]);
    let a = &merged[1];
    assert_eq!(a.position, Point::new(10.0, 10.0));
    // Re-imported pins get the default style.
    assert_eq!((a.shape, a.size), (PinShape::Circle, PinSize::Md));
}

#[test]
fn test_round_trip_into_floor() {
    let floor = Floor::new("Ground");
    let import = parse_pin_csv("asset_id,x,y\nM1,100,200\nM2,300,400\n");
    let floor = import.apply(&floor);
    assert_eq!(floor.pins.len(), 2);
    assert_eq!(floor.pin("M2").map(|p| p.position), Some(Point::new(300.0, 400.0)));

    // Importing the same file again leaves one pin per asset.
    let floor = import.apply(&floor);
    assert_eq!(floor.pins.len(), 2);
}

#[test]
fn test_editor_import_records_history_only_for_valid_rows() {
    let mut state = EditorState::default();
    let floor = state.active_floor_id();

    let import = state.import_pins(floor, "garbage\n").unwrap();
    assert_eq!(import.invalid_count(), 1);
    assert!(!state.can_undo());

    state.import_pins(floor, "A,1,1\nbad\n").unwrap();
    assert!(state.can_undo());
    assert_eq!(state.active_floor().pins.len(), 1);

    state.undo();
    assert!(state.active_floor().pins.is_empty());
}
