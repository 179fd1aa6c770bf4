//! Task board state: the denormalized board snapshot, the optimistic
//! mutation lifecycle, and drag/drop splicing.
//!
//! Every mutation is applied to the local board first, then sent to the
//! backend. Before applying we snapshot the whole board; a failed request
//! restores that snapshot wholesale instead of trying to invert the edit.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::net::types::{Priority, Task, TaskBoard};
use crate::state::validate::{FieldError, require_due_date, require_title};

/// Backend task status, keyed off the column a card sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// The status a card acquires by landing in `column_id`. Unknown
    /// columns yield `None` and the status update is skipped.
    pub fn for_column(column_id: &str) -> Option<Self> {
        match column_id {
            "column-1" => Some(TaskStatus::Todo),
            "column-2" => Some(TaskStatus::InProgress),
            "column-3" => Some(TaskStatus::Review),
            "column-4" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Review => "REVIEW",
            TaskStatus::Done => "DONE",
        }
    }
}

/// Lifecycle of the single in-flight optimistic mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MutationPhase {
    #[default]
    Idle,
    /// A mutation is in flight; `before` is the board as it was when the
    /// mutation began, restored verbatim on failure.
    Pending { before: TaskBoard },
    /// The last mutation failed and the board was restored. Sticks until
    /// the user dismisses the error banner.
    RolledBack { message: String },
}

/// What a drag carries through the browser's dataTransfer channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub task_id: String,
    pub from_column: String,
}

impl DragPayload {
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Payload for creating or updating a task, validated before send.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
}

/// What the task dialog edits. `due_date` holds the raw input value so
/// validation happens in one place, on submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            due_date: task.due_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Validate the draft against `today`. Runs before any request, so a
    /// rejected draft never produces network traffic.
    pub fn validate(&self, today: NaiveDate) -> Result<TaskPayload, FieldError> {
        let title = require_title(&self.title)?;
        let due_date = require_due_date(&self.due_date, today)?;
        Ok(TaskPayload {
            title,
            description: self.description.trim().to_owned(),
            priority: self.priority,
            due_date,
        })
    }
}

/// Board state provided via context as `RwSignal<BoardState>`.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub board: TaskBoard,
    pub loading: bool,
    pub error: Option<String>,
    pub mutation: MutationPhase,
    /// Show only cards of this priority; `None` shows everything.
    pub filter: Option<Priority>,
    pub dragging: bool,
    /// Bumped on every reload so stale async completions can be dropped.
    pub epoch: u64,
}

impl BoardState {
    pub fn adopt(&mut self, board: TaskBoard) {
        self.board = board;
        self.loading = false;
        self.error = None;
        self.epoch += 1;
    }

    /// Snapshot the board and enter `Pending`. Refused while another
    /// mutation is still in flight.
    pub fn begin_mutation(&mut self) -> bool {
        match self.mutation {
            MutationPhase::Pending { .. } => false,
            _ => {
                self.mutation = MutationPhase::Pending { before: self.board.clone() };
                true
            }
        }
    }

    /// The in-flight mutation succeeded; the optimistic board is now the
    /// real board.
    pub fn commit(&mut self) {
        self.mutation = MutationPhase::Idle;
    }

    /// The in-flight mutation failed; restore the snapshot wholesale.
    pub fn roll_back(&mut self, message: String) {
        if let MutationPhase::Pending { before } = std::mem::take(&mut self.mutation) {
            self.board = before;
        }
        self.mutation = MutationPhase::RolledBack { message };
    }

    pub fn dismiss_rollback(&mut self) {
        if matches!(self.mutation, MutationPhase::RolledBack { .. }) {
            self.mutation = MutationPhase::Idle;
        }
    }

    pub fn rollback_message(&self) -> Option<&str> {
        match &self.mutation {
            MutationPhase::RolledBack { message } => Some(message),
            _ => None,
        }
    }

    /// Move a card: remove it from `from_column`, then insert at
    /// `to_index` in `to_column` (clamped to the column's length). Within
    /// one column the index is interpreted after removal, matching what
    /// the drop position on screen means.
    pub fn move_task(
        &mut self,
        task_id: &str,
        from_column: &str,
        to_column: &str,
        to_index: usize,
    ) -> bool {
        if !self.board.columns.contains_key(to_column) {
            return false;
        }
        let Some(source) = self.board.columns.get_mut(from_column) else {
            return false;
        };
        let Some(pos) = source.task_ids.iter().position(|id| id == task_id) else {
            return false;
        };
        source.task_ids.remove(pos);
        let Some(dest) = self.board.columns.get_mut(to_column) else {
            return false;
        };
        let index = to_index.min(dest.task_ids.len());
        dest.task_ids.insert(index, task_id.to_owned());
        true
    }

    /// Insert an optimistic task at the end of a column.
    pub fn insert_task(&mut self, column_id: &str, task: Task) -> bool {
        let Some(column) = self.board.columns.get_mut(column_id) else {
            return false;
        };
        column.task_ids.push(task.id.clone());
        self.board.tasks.insert(task.id.clone(), task);
        true
    }

    /// Replace a task record in place, leaving column membership alone.
    pub fn update_task(&mut self, task: Task) -> bool {
        if !self.board.tasks.contains_key(&task.id) {
            return false;
        }
        self.board.tasks.insert(task.id.clone(), task);
        true
    }

    /// Remove a task from the lookup map and whichever column holds it.
    pub fn remove_task(&mut self, task_id: &str) -> bool {
        let existed = self.board.tasks.remove(task_id).is_some();
        for column in self.board.columns.values_mut() {
            column.task_ids.retain(|id| id != task_id);
        }
        existed
    }

    /// Task ids a column should render, honoring the priority filter.
    /// While a drag is in progress the filter is suspended, so filtered
    /// cards reappear and on-screen indices keep matching the underlying
    /// lists; it re-applies when the gesture ends.
    pub fn visible_task_ids(&self, column_id: &str) -> Vec<String> {
        let Some(column) = self.board.columns.get(column_id) else {
            return Vec::new();
        };
        let (Some(wanted), false) = (self.filter, self.dragging) else {
            return column.task_ids.clone();
        };
        column
            .task_ids
            .iter()
            .filter(|id| {
                self.board.tasks.get(*id).is_some_and(|task| task.priority == wanted)
            })
            .cloned()
            .collect()
    }
}
