use super::*;

#[test]
fn empty_history_has_nothing_to_step_to() {
    let mut history: History<i32> = History::default();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo(0), None);
    assert_eq!(history.redo(0), None);
}

#[test]
fn undo_n_then_redo_n_returns_to_the_final_state() {
    let mut history = History::new(10);
    // Simulate edits 0 -> 1 -> 2 -> 3, recording the pre-edit state each time.
    let mut current = 0;
    for next in 1..=3 {
        history.record(current);
        current = next;
    }

    // Undo all the way back to the original.
    for expected in [2, 1, 0] {
        current = history.undo(current).unwrap();
        assert_eq!(current, expected);
    }
    assert!(!history.can_undo());

    // Redo all the way forward again.
    for expected in [1, 2, 3] {
        current = history.redo(current).unwrap();
        assert_eq!(current, expected);
    }
    assert!(!history.can_redo());
    assert_eq!(current, 3);
}

#[test]
fn recording_after_undo_discards_the_redo_branch() {
    let mut history = History::new(10);
    history.record("a");
    let mut current = "b";

    current = history.undo(current).unwrap();
    assert_eq!(current, "a");
    assert!(history.can_redo());

    history.record(current);
    assert!(!history.can_redo());
}

#[test]
fn history_evicts_oldest_snapshot_beyond_the_limit() {
    let mut history = History::new(2);
    history.record(1);
    history.record(2);
    history.record(3);

    assert_eq!(history.undo(4), Some(3));
    assert_eq!(history.undo(3), Some(2));
    // Snapshot 1 was evicted.
    assert_eq!(history.undo(2), None);
}

#[test]
fn clear_forgets_both_stacks() {
    let mut history = History::new(10);
    history.record(1);
    let _ = history.undo(2);
    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
