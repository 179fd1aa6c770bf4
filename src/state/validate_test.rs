use super::*;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// =============================================================
// Title
// =============================================================

#[test]
fn title_is_trimmed() {
    assert_eq!(require_title("  Ship it  ").unwrap(), "Ship it");
}

#[test]
fn whitespace_only_title_is_rejected() {
    assert_eq!(require_title("   "), Err(FieldError::TitleRequired));
    assert_eq!(require_title(""), Err(FieldError::TitleRequired));
}

// =============================================================
// Due date
// =============================================================

#[test]
fn due_date_today_is_allowed() {
    let today = day("2026-06-10");
    assert_eq!(require_due_date("2026-06-10", today).unwrap(), today);
}

#[test]
fn due_date_in_future_is_allowed() {
    let today = day("2026-06-10");
    assert_eq!(require_due_date("2026-07-01", today).unwrap(), day("2026-07-01"));
}

#[test]
fn due_date_strictly_before_today_is_rejected() {
    let today = day("2026-06-10");
    assert_eq!(require_due_date("2026-06-09", today), Err(FieldError::DueDatePast));
}

#[test]
fn missing_or_garbled_due_date_is_rejected() {
    let today = day("2026-06-10");
    assert_eq!(require_due_date("", today), Err(FieldError::DueDateRequired));
    assert_eq!(require_due_date("next tuesday", today), Err(FieldError::DueDateInvalid));
}
