//! Wire types for the backend JSON API.
//!
//! Field names follow the backend's camelCase JSON; structs rename
//! accordingly so the Rust side stays snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================
// Auth
// =============================================================

/// Access/refresh token pair returned by `auth/login`, `auth/register`,
/// and `auth/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub token: String,
    pub refresh_token: String,
}

/// Profile record from `user/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
}

// =============================================================
// Task board
// =============================================================

/// Task priority, lowercase on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A single card on the task board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub attachments: u32,
}

/// An ordered column of task ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub id: String,
    pub title: String,
    pub task_ids: Vec<String>,
}

/// Denormalized board snapshot from `GET taskboard`.
///
/// Invariant: every id in any column's `task_ids` keys into `tasks`, and a
/// task id appears in exactly one column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoard {
    pub columns: HashMap<String, BoardColumn>,
    pub tasks: HashMap<String, Task>,
    pub column_order: Vec<String>,
}

impl TaskBoard {
    /// Tasks of one column in column order, skipping ids with no task
    /// record (a server-side inconsistency we tolerate rather than panic on).
    pub fn column_tasks(&self, column_id: &str) -> Vec<&Task> {
        let Some(column) = self.columns.get(column_id) else {
            return Vec::new();
        };
        column
            .task_ids
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .collect()
    }
}

// =============================================================
// Timeline
// =============================================================

/// A task bar on the timeline, spanning `duration` days from `start_day`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineTask {
    pub id: String,
    pub name: String,
    pub start_day: NaiveDate,
    pub duration: u32,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineProject {
    pub id: String,
    pub name: String,
    pub color: String,
    pub tasks: Vec<TimelineTask>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub project: String,
    pub date: NaiveDate,
}

/// Snapshot from `GET timeline`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineData {
    pub projects: Vec<TimelineProject>,
    #[serde(default)]
    pub upcoming_milestones: Vec<Milestone>,
    #[serde(default)]
    pub project_progress: HashMap<String, f64>,
}

// =============================================================
// Creative canvas
// =============================================================

/// Canvas list entry / header from `GET canvases` and `GET canvas/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasInfo {
    pub id: String,
    pub title: String,
}

/// Text styling, all fields optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_class: Option<String>,
}

/// Sticky-note styling, all fields optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

/// Item kind plus the payload that kind carries. The wire shape is a
/// `type` discriminant next to `content`/`style`, so this maps onto an
/// internally tagged enum: each variant owns only the fields it needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemBody {
    Text {
        content: String,
        #[serde(default)]
        style: TextStyle,
    },
    /// `content` is a data URI once uploaded, or a placeholder path.
    Image { content: String },
    Note {
        content: String,
        #[serde(default)]
        style: NoteStyle,
    },
}

impl ItemBody {
    pub fn content(&self) -> &str {
        match self {
            ItemBody::Text { content, .. }
            | ItemBody::Image { content }
            | ItemBody::Note { content, .. } => content,
        }
    }

    pub fn set_content(&mut self, new: String) {
        match self {
            ItemBody::Text { content, .. }
            | ItemBody::Image { content }
            | ItemBody::Note { content, .. } => *content = new,
        }
    }

    /// Whether the item's text can be edited inline.
    pub fn editable(&self) -> bool {
        !matches!(self, ItemBody::Image { .. })
    }
}

/// One positioned item on the creative canvas. `id` is absent until the
/// backend assigns one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub body: ItemBody,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Snapshot from `GET canvas/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasDoc {
    pub canvas: CanvasInfo,
    pub items: Vec<CanvasItem>,
}

// =============================================================
// To-do list
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: String,
    pub due_date: NaiveDate,
    pub category: String,
    pub completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================
// Dashboard
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub action: String,
    #[serde(default)]
    pub details: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingTask {
    pub title: String,
    pub time: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProductivity {
    pub day: String,
    pub task_count: u32,
}

/// Read-only summary from `GET dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub user_name: String,
    pub task_count: u64,
    pub task_progress: f64,
    pub project_count: u64,
    pub project_progress: f64,
    pub idea_count: u64,
    pub new_ideas_since_yesterday: u64,
    #[serde(default)]
    pub recent_project_activities: Vec<Activity>,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
    #[serde(default)]
    pub upcoming_tasks: Vec<UpcomingTask>,
    #[serde(default)]
    pub weekly_productivity: Vec<DayProductivity>,
}
