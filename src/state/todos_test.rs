use super::*;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn item(id: &str, title: &str, completed: bool) -> TodoItem {
    TodoItem {
        id: id.to_owned(),
        title: title.to_owned(),
        description: String::new(),
        priority: "MEDIUM".to_owned(),
        due_date: day("2026-06-15"),
        category: "General".to_owned(),
        completed,
        created_at: None,
    }
}

fn loaded() -> TodoState {
    let mut state = TodoState::default();
    state.adopt(vec![
        item("d1", "Buy groceries", false),
        item("d2", "File taxes", true),
        item("d3", "Water plants", false),
    ]);
    state
}

// =============================================================
// Filtering and counts
// =============================================================

#[test]
fn filters_partition_by_completion() {
    let mut state = loaded();
    assert_eq!(state.visible().len(), 3);

    state.filter = TodoFilter::Active;
    let titles: Vec<_> = state.visible().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Buy groceries", "Water plants"]);

    state.filter = TodoFilter::Completed;
    let titles: Vec<_> = state.visible().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["File taxes"]);

    assert_eq!(state.remaining(), 2);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn toggle_flips_and_reports_the_new_value() {
    let mut state = loaded();
    assert_eq!(state.toggle("d1"), Some(true));
    assert_eq!(state.toggle("d2"), Some(false));
    assert_eq!(state.toggle("ghost"), None);
    assert_eq!(state.remaining(), 2);

    // A failed PATCH puts the old value back.
    state.set_completed("d1", false);
    assert_eq!(state.remaining(), 3);
}

#[test]
fn remove_returns_the_item_for_rollback() {
    let mut state = loaded();
    let removed = state.remove("d2").unwrap();
    assert_eq!(removed.title, "File taxes");
    assert_eq!(state.items.len(), 2);
    assert!(state.remove("d2").is_none());

    state.insert(removed);
    assert_eq!(state.items[0].title, "File taxes");
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn draft_rejects_blank_title_and_past_due_date() {
    let today = day("2026-06-10");
    let draft = TodoDraft { title: "  ".to_owned(), ..TodoDraft::default() };
    assert_eq!(draft.validate(today), Err(FieldError::TitleRequired));

    let draft = TodoDraft {
        title: "Buy groceries".to_owned(),
        due_date: "2026-06-09".to_owned(),
        ..TodoDraft::default()
    };
    assert_eq!(draft.validate(today), Err(FieldError::DueDatePast));
}

#[test]
fn draft_fills_defaults_and_uppercases_priority() {
    let draft = TodoDraft {
        title: "Buy groceries".to_owned(),
        due_date: "2026-06-10".to_owned(),
        priority: "high".to_owned(),
        ..TodoDraft::default()
    };
    let payload = draft.validate(day("2026-06-10")).unwrap();
    assert_eq!(payload.priority, "HIGH");
    assert_eq!(payload.category, "General");
    assert_eq!(serde_json::to_value(&payload).unwrap()["dueDate"], "2026-06-10");
}
