//! Creative canvas state: the loaded document, item edits, and the
//! undo/redo history of full item-list snapshots.
//!
//! A history entry is recorded once per user-visible edit. A drag
//! records a single entry when the pointer goes down, not one per
//! pointermove, so undo steps back whole gestures.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use crate::net::types::{CanvasDoc, CanvasInfo, CanvasItem, ItemBody, NoteStyle, TextStyle};
use crate::state::history::History;

/// Canvas state provided via context as `RwSignal<CanvasState>`.
#[derive(Clone, Debug, Default)]
pub struct CanvasState {
    pub canvases: Vec<CanvasInfo>,
    pub doc: CanvasDoc,
    pub history: History<Vec<CanvasItem>>,
    /// Index into `doc.items`; indices are the identity of optimistic
    /// items that have no backend id yet.
    pub selected: Option<usize>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every document switch so stale async completions can be
    /// dropped.
    pub epoch: u64,
}

impl CanvasState {
    /// Swap in a freshly loaded document, dropping the old history.
    pub fn adopt(&mut self, doc: CanvasDoc) {
        self.doc = doc;
        self.history.clear();
        self.selected = None;
        self.loading = false;
        self.error = None;
        self.epoch += 1;
    }

    /// Record the current item list as an undo point.
    pub fn checkpoint(&mut self) {
        self.history.record(self.doc.items.clone());
    }

    /// Append an item as a new undoable edit and select it.
    pub fn add_item(&mut self, item: CanvasItem) {
        self.checkpoint();
        self.doc.items.push(item);
        self.selected = Some(self.doc.items.len() - 1);
    }

    /// Move an item without recording history. Callers checkpoint once at
    /// gesture start.
    pub fn place_item(&mut self, index: usize, x: f64, y: f64) {
        if let Some(item) = self.doc.items.get_mut(index) {
            item.x = x;
            item.y = y;
        }
    }

    /// Replace an item's text as a new undoable edit. Image content is
    /// not editable inline.
    pub fn set_content(&mut self, index: usize, content: String) -> bool {
        let Some(item) = self.doc.items.get(index) else {
            return false;
        };
        if !item.body.editable() || item.body.content() == content {
            return false;
        }
        self.checkpoint();
        if let Some(item) = self.doc.items.get_mut(index) {
            item.body.set_content(content);
        }
        true
    }

    /// Remove an item as a new undoable edit, returning it for the
    /// delete request.
    pub fn remove_item(&mut self, index: usize) -> Option<CanvasItem> {
        if index >= self.doc.items.len() {
            return None;
        }
        self.checkpoint();
        let removed = self.doc.items.remove(index);
        self.selected = None;
        Some(removed)
    }

    pub fn undo(&mut self) -> bool {
        let Some(items) = self.history.undo(self.doc.items.clone()) else {
            return false;
        };
        self.doc.items = items;
        self.drop_stale_selection();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(items) = self.history.redo(self.doc.items.clone()) else {
            return false;
        };
        self.doc.items = items;
        self.drop_stale_selection();
        true
    }

    fn drop_stale_selection(&mut self) {
        if self.selected.is_some_and(|i| i >= self.doc.items.len()) {
            self.selected = None;
        }
    }
}

/// A fresh text item at the given position.
pub fn new_text_item(x: f64, y: f64) -> CanvasItem {
    CanvasItem {
        id: None,
        body: ItemBody::Text {
            content: "New text".to_owned(),
            style: TextStyle {
                font_size: Some("16px".to_owned()),
                font_weight: None,
                color_class: Some("text-foreground".to_owned()),
            },
        },
        x,
        y,
        width: 200.0,
        height: 50.0,
    }
}

/// A fresh sticky note at the given position.
pub fn new_note_item(x: f64, y: f64) -> CanvasItem {
    CanvasItem {
        id: None,
        body: ItemBody::Note {
            content: "New note".to_owned(),
            style: NoteStyle {
                background_class: Some("bg-yellow-100".to_owned()),
                padding: Some("12px".to_owned()),
                border_radius: Some("8px".to_owned()),
            },
        },
        x,
        y,
        width: 200.0,
        height: 120.0,
    }
}

/// A fresh image item; `content` is a placeholder until the upload
/// response supplies the stored data URI.
pub fn new_image_item(x: f64, y: f64, content: String) -> CanvasItem {
    CanvasItem {
        id: None,
        body: ItemBody::Image { content },
        x,
        y,
        width: 240.0,
        height: 180.0,
    }
}
