use super::*;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn bar(start: &str, duration: u32) -> TimelineTask {
    TimelineTask {
        id: "tt1".to_owned(),
        name: "Design".to_owned(),
        start_day: day(start),
        duration,
        completed: false,
    }
}

// 2026-03-02 is a Monday.
fn state() -> TimelineState {
    TimelineState::starting(day("2026-03-04"))
}

// =============================================================
// Window arithmetic
// =============================================================

#[test]
fn window_starts_on_monday_of_the_current_week() {
    let state = state();
    assert_eq!(state.window_start, day("2026-03-02"));
    let days = state.window_days();
    assert_eq!(days.len(), 14);
    assert_eq!(days[0], day("2026-03-02"));
    assert_eq!(days[13], day("2026-03-15"));
}

#[test]
fn shift_window_moves_in_whole_weeks() {
    let mut state = state();
    state.shift_window(1);
    assert_eq!(state.window_start, day("2026-03-09"));
    state.shift_window(-2);
    assert_eq!(state.window_start, day("2026-02-23"));
}

// =============================================================
// Task spans
// =============================================================

#[test]
fn span_inside_the_window_keeps_its_length() {
    let state = state();
    let span = state.task_span(&bar("2026-03-04", 3)).unwrap();
    assert_eq!(span, TaskSpan { offset: 2, length: 3 });
}

#[test]
fn span_is_clipped_at_both_edges() {
    let state = state();
    // Starts before the window: clipped on the left.
    let span = state.task_span(&bar("2026-02-27", 5)).unwrap();
    assert_eq!(span, TaskSpan { offset: 0, length: 2 });
    // Runs past the window: clipped on the right.
    let span = state.task_span(&bar("2026-03-14", 10)).unwrap();
    assert_eq!(span, TaskSpan { offset: 12, length: 2 });
}

#[test]
fn span_outside_the_window_is_none() {
    let state = state();
    assert_eq!(state.task_span(&bar("2026-02-20", 3)), None);
    assert_eq!(state.task_span(&bar("2026-03-20", 3)), None);
    assert_eq!(state.task_span(&bar("2026-03-04", 0)), None);
}

#[test]
fn progress_defaults_to_zero_for_unknown_projects() {
    let mut state = state();
    state.data.project_progress.insert("p1".to_owned(), 40.0);
    assert!((state.progress_of("p1") - 40.0).abs() < f64::EPSILON);
    assert!((state.progress_of("p2")).abs() < f64::EPSILON);
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn draft_requires_a_name_and_a_parseable_start() {
    let draft = TimelineDraft {
        name: " ".to_owned(),
        start_day: "2026-03-02".to_owned(),
        ..TimelineDraft::default()
    };
    assert_eq!(draft.validate(), Err(FieldError::TitleRequired));

    let draft = TimelineDraft {
        name: "Design".to_owned(),
        start_day: String::new(),
        ..TimelineDraft::default()
    };
    assert_eq!(draft.validate(), Err(FieldError::DueDateRequired));
}

#[test]
fn draft_duration_floors_at_one_day() {
    let draft = TimelineDraft {
        name: "Design".to_owned(),
        project_id: "p1".to_owned(),
        start_day: "2026-03-02".to_owned(),
        duration: "0".to_owned(),
    };
    let payload = draft.validate().unwrap();
    assert_eq!(payload.duration, 1);

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["startDay"], "2026-03-02");
    assert_eq!(value["projectId"], "p1");
}
