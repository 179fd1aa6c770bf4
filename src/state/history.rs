//! Linear undo/redo over full snapshots.
//!
//! Generic over the snapshot type so the canvas can store its item list
//! without the history caring what an item is. Recording a new snapshot
//! discards the redo stack, which keeps the history a straight line.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Default cap on remembered snapshots.
pub const DEFAULT_LIMIT: usize = 50;

#[derive(Clone, Debug)]
pub struct History<T> {
    past: Vec<T>,
    future: Vec<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl<T> History<T> {
    pub fn new(limit: usize) -> Self {
        Self { past: Vec::new(), future: Vec::new(), limit: limit.max(1) }
    }

    /// Remember `snapshot` as the state before the edit about to happen.
    /// Any redoable states are gone after this.
    pub fn record(&mut self, snapshot: T) {
        self.past.push(snapshot);
        if self.past.len() > self.limit {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Step back: returns the snapshot to restore, filing `current` away
    /// for redo. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Forget everything, e.g. when a different document is loaded.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
