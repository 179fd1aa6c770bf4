//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `board`, `canvas`, etc.) so
//! individual pages can depend on small focused models. Everything in
//! here is plain data plus pure transitions, so it tests natively; the
//! browser-only I/O lives in `net` and in the pages that drive it.

pub mod board;
pub mod canvas;
pub mod dashboard;
pub mod history;
pub mod session;
pub mod timeline;
pub mod todos;
pub mod ui;
pub mod validate;
