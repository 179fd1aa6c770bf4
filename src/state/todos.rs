//! To-do list state: the flat item list, the completion filter, and the
//! quick-add draft.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use chrono::NaiveDate;
use serde::Serialize;

use crate::net::types::TodoItem;
use crate::state::validate::{FieldError, require_due_date, require_title};

/// Which items the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Active => "Active",
            TodoFilter::Completed => "Completed",
        }
    }

    fn admits(self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !item.completed,
            TodoFilter::Completed => item.completed,
        }
    }
}

/// To-do state provided via context as `RwSignal<TodoState>`.
#[derive(Clone, Debug, Default)]
pub struct TodoState {
    pub items: Vec<TodoItem>,
    pub filter: TodoFilter,
    pub loading: bool,
    pub error: Option<String>,
    pub epoch: u64,
}

impl TodoState {
    pub fn adopt(&mut self, items: Vec<TodoItem>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.epoch += 1;
    }

    pub fn visible(&self) -> Vec<&TodoItem> {
        self.items.iter().filter(|i| self.filter.admits(i)).collect()
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|i| !i.completed).count()
    }

    /// Flip completion locally, returning the new value for the PATCH.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    pub fn set_completed(&mut self, id: &str, completed: bool) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.completed = completed;
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<TodoItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn insert(&mut self, item: TodoItem) {
        self.items.insert(0, item);
    }
}

/// Validated payload for `POST todos`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: NaiveDate,
    pub category: String,
}

/// What the quick-add row edits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
    pub category: String,
}

impl TodoDraft {
    /// Same rules as the task dialog: a trimmed title and a due date no
    /// earlier than today, checked before any request goes out.
    pub fn validate(&self, today: NaiveDate) -> Result<TodoPayload, FieldError> {
        let title = require_title(&self.title)?;
        let due_date = require_due_date(&self.due_date, today)?;
        let priority = if self.priority.trim().is_empty() {
            "MEDIUM".to_owned()
        } else {
            self.priority.trim().to_uppercase()
        };
        let category = if self.category.trim().is_empty() {
            "General".to_owned()
        } else {
            self.category.trim().to_owned()
        };
        Ok(TodoPayload {
            title,
            description: self.description.trim().to_owned(),
            priority,
            due_date,
            category,
        })
    }
}
