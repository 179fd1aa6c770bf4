//! Form-field validation shared by the task board, to-do list, and
//! timeline dialogs. Validation runs before any request is issued, so a
//! rejected draft never reaches the network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use chrono::NaiveDate;

/// A field the user has to fix before the draft can be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Due date is required")]
    DueDateRequired,
    #[error("Due date is not a valid date")]
    DueDateInvalid,
    #[error("Due date cannot be in the past")]
    DueDatePast,
}

/// Trim the title and reject it when nothing is left.
pub fn require_title(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FieldError::TitleRequired)
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Parse a `YYYY-MM-DD` value from a date input and reject dates strictly
/// before `today`. Today itself is allowed.
pub fn require_due_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::DueDateRequired);
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| FieldError::DueDateInvalid)?;
    if date < today {
        Err(FieldError::DueDatePast)
    } else {
        Ok(date)
    }
}
