use facilitymap_editor::EditHistory;

#[test]
fn test_new_history_is_empty() {
    let history = EditHistory::new("a");
    assert_eq!(*history.current(), "a");
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.max_depth(), 50);
}

#[test]
fn test_undo_then_redo() {
    let mut history = EditHistory::new("start");
    history.set("a");
    history.set("b");

    assert!(history.undo());
    assert_eq!(*history.current(), "a");
    assert!(history.can_redo());

    assert!(history.redo());
    assert_eq!(*history.current(), "b");
    assert!(!history.can_redo());
}

#[test]
fn test_set_after_undo_discards_redo() {
    let mut history = EditHistory::new("start");
    history.set("a");
    history.undo();
    history.set("c");

    assert_eq!(*history.current(), "c");
    assert!(!history.can_redo());
    assert!(!history.redo());
    assert_eq!(*history.current(), "c");
}

#[test]
fn test_empty_undo_redo_are_noops() {
    let mut history = EditHistory::new(1);
    assert!(!history.undo());
    assert!(!history.redo());
    assert_eq!(*history.current(), 1);
}

#[test]
fn test_bound_drops_oldest_state() {
    let mut history = EditHistory::with_depth(0, 3);
    for value in 1..=5 {
        history.set(value);
    }
    assert_eq!(history.undo_depth(), 3);

    let mut seen = Vec::new();
    while history.undo() {
        seen.push(*history.current());
    }
    assert_eq!(seen, vec![4, 3, 2]);
    // 0 and 1 fell off the bottom.
    assert_eq!(*history.current(), 2);
}

#[test]
fn test_redo_order_after_multiple_undos() {
    let mut history = EditHistory::new('a');
    history.set('b');
    history.set('c');
    history.undo();
    history.undo();
    assert_eq!(history.redo_depth(), 2);

    history.redo();
    assert_eq!(*history.current(), 'b');
    history.redo();
    assert_eq!(*history.current(), 'c');
}

#[test]
fn test_reset_forgets_history() {
    let mut history = EditHistory::new(0);
    history.set(1);
    history.set(2);
    history.undo();
    history.reset(10);
    assert_eq!(*history.current(), 10);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_zero_depth_is_clamped() {
    let mut history = EditHistory::with_depth("x", 0);
    assert_eq!(history.max_depth(), 1);
    history.set("y");
    history.set("z");
    assert!(history.undo());
    assert_eq!(*history.current(), "y");
    assert!(!history.undo());
}
