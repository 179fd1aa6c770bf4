//! Timeline state: the project/task data plus the visible date window
//! and the arithmetic that places task bars inside it.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::net::types::{TimelineData, TimelineTask};
use crate::state::validate::{FieldError, require_title};

/// Days shown at once.
pub const WINDOW_DAYS: u32 = 14;

/// Where a task bar sits inside the visible window: offset from the
/// window start and visible length, both in days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskSpan {
    pub offset: u32,
    pub length: u32,
}

/// Timeline state provided via context as `RwSignal<TimelineState>`.
#[derive(Clone, Debug)]
pub struct TimelineState {
    pub data: TimelineData,
    pub window_start: NaiveDate,
    pub loading: bool,
    pub error: Option<String>,
    pub epoch: u64,
}

impl TimelineState {
    /// Start the window on the Monday of `today`'s week.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            data: TimelineData::default(),
            window_start: monday_of(today),
            loading: false,
            error: None,
            epoch: 0,
        }
    }

    pub fn adopt(&mut self, data: TimelineData) {
        self.data = data;
        self.loading = false;
        self.error = None;
        self.epoch += 1;
    }

    /// The dates of the visible window, in order.
    pub fn window_days(&self) -> Vec<NaiveDate> {
        (0..WINDOW_DAYS)
            .filter_map(|i| self.window_start.checked_add_days(Days::new(u64::from(i))))
            .collect()
    }

    pub fn shift_window(&mut self, weeks: i32) {
        let days = Days::new(7 * u64::from(weeks.unsigned_abs()));
        let shifted = if weeks < 0 {
            self.window_start.checked_sub_days(days)
        } else {
            self.window_start.checked_add_days(days)
        };
        if let Some(start) = shifted {
            self.window_start = start;
        }
    }

    /// Where `task` falls inside the window, clipped to its edges.
    /// `None` when the bar lies entirely outside.
    pub fn task_span(&self, task: &TimelineTask) -> Option<TaskSpan> {
        if task.duration == 0 {
            return None;
        }
        let window_end = self
            .window_start
            .checked_add_days(Days::new(u64::from(WINDOW_DAYS)))?;
        let task_end = task
            .start_day
            .checked_add_days(Days::new(u64::from(task.duration)))?;
        if task_end <= self.window_start || task.start_day >= window_end {
            return None;
        }

        let start = task.start_day.max(self.window_start);
        let end = task_end.min(window_end);
        let offset = u32::try_from((start - self.window_start).num_days()).ok()?;
        let length = u32::try_from((end - start).num_days()).ok()?;
        Some(TaskSpan { offset, length })
    }

    pub fn progress_of(&self, project_id: &str) -> f64 {
        self.data
            .project_progress
            .get(project_id)
            .copied()
            .unwrap_or(0.0)
    }
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().days_since(Weekday::Mon));
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// What the add-task dialog edits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineDraft {
    pub name: String,
    pub project_id: String,
    pub start_day: String,
    pub duration: String,
}

/// Validated payload for `POST timeline/task`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineTaskPayload {
    pub name: String,
    pub project_id: String,
    pub start_day: NaiveDate,
    pub duration: u32,
}

impl TimelineDraft {
    /// A start day in the past is fine here; timelines describe work
    /// that already happened too. Only the shape is checked.
    pub fn validate(&self) -> Result<TimelineTaskPayload, FieldError> {
        let name = require_title(&self.name)?;
        let start_day = NaiveDate::parse_from_str(self.start_day.trim(), "%Y-%m-%d")
            .map_err(|_| {
                if self.start_day.trim().is_empty() {
                    FieldError::DueDateRequired
                } else {
                    FieldError::DueDateInvalid
                }
            })?;
        let duration = self.duration.trim().parse::<u32>().unwrap_or(0).max(1);
        Ok(TimelineTaskPayload {
            name,
            project_id: self.project_id.clone(),
            start_day,
            duration,
        })
    }
}
