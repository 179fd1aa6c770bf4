use super::*;

fn loaded() -> CanvasState {
    let mut state = CanvasState::default();
    state.adopt(CanvasDoc {
        canvas: CanvasInfo { id: "c1".to_owned(), title: "Brainstorm".to_owned() },
        items: Vec::new(),
    });
    state
}

fn contents(state: &CanvasState) -> Vec<&str> {
    state.doc.items.iter().map(|i| i.body.content()).collect()
}

// =============================================================
// Edits and history
// =============================================================

#[test]
fn undo_n_then_redo_n_restores_every_step() {
    let mut state = loaded();
    state.add_item(new_text_item(10.0, 10.0));
    state.add_item(new_note_item(20.0, 20.0));
    assert!(state.set_content(0, "Project ideas".to_owned()));
    let final_items = state.doc.items.clone();

    assert!(state.undo());
    assert_eq!(contents(&state), vec!["New text", "New note"]);
    assert!(state.undo());
    assert_eq!(contents(&state), vec!["New text"]);
    assert!(state.undo());
    assert!(state.doc.items.is_empty());
    assert!(!state.undo());

    assert!(state.redo());
    assert!(state.redo());
    assert!(state.redo());
    assert!(!state.redo());
    assert_eq!(state.doc.items, final_items);
}

#[test]
fn drag_gesture_is_one_history_entry() {
    let mut state = loaded();
    state.add_item(new_text_item(0.0, 0.0));

    // Pointer down checkpoints once; every move after that is free.
    state.checkpoint();
    state.place_item(0, 5.0, 5.0);
    state.place_item(0, 50.0, 80.0);
    assert_eq!(state.doc.items[0].x, 50.0);

    assert!(state.undo());
    assert_eq!(state.doc.items[0].x, 0.0);
}

#[test]
fn set_content_skips_images_and_no_op_edits() {
    let mut state = loaded();
    state.add_item(new_image_item(0.0, 0.0, "/placeholder.svg".to_owned()));
    assert!(!state.set_content(0, "caption".to_owned()));

    state.add_item(new_text_item(0.0, 0.0));
    assert!(!state.set_content(1, "New text".to_owned()));
    assert!(!state.set_content(9, "missing".to_owned()));
}

#[test]
fn remove_item_returns_it_and_clears_selection() {
    let mut state = loaded();
    state.add_item(new_note_item(0.0, 0.0));
    assert_eq!(state.selected, Some(0));

    let removed = state.remove_item(0).unwrap();
    assert_eq!(removed.body.content(), "New note");
    assert!(state.doc.items.is_empty());
    assert_eq!(state.selected, None);
    assert!(state.remove_item(0).is_none());

    // The removal itself is undoable.
    assert!(state.undo());
    assert_eq!(contents(&state), vec!["New note"]);
}

#[test]
fn undo_drops_selection_that_no_longer_exists() {
    let mut state = loaded();
    state.add_item(new_text_item(0.0, 0.0));
    state.add_item(new_text_item(10.0, 0.0));
    assert_eq!(state.selected, Some(1));

    assert!(state.undo());
    assert_eq!(state.selected, None);
}

// =============================================================
// Document switching
// =============================================================

#[test]
fn edits_do_not_advance_the_epoch() {
    // Late failures from item requests are applied only when the epoch
    // still matches, so edits within one document must not move it.
    let mut state = loaded();
    let epoch = state.epoch;

    state.add_item(new_note_item(0.0, 0.0));
    assert!(state.set_content(0, "Launch plan".to_owned()));
    assert!(state.remove_item(0).is_some());
    assert_eq!(state.epoch, epoch);
}

#[test]
fn adopt_resets_history_and_bumps_epoch() {
    let mut state = loaded();
    state.add_item(new_text_item(0.0, 0.0));
    let epoch = state.epoch;

    state.adopt(CanvasDoc {
        canvas: CanvasInfo { id: "c2".to_owned(), title: "Moodboard".to_owned() },
        items: vec![new_note_item(1.0, 1.0)],
    });
    assert_eq!(state.epoch, epoch + 1);
    assert!(!state.history.can_undo());
    assert_eq!(state.doc.canvas.id, "c2");
}
