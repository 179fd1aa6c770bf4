//! Reusable UI components shared across pages.

pub mod error_banner;
pub mod loader;
pub mod protected;
pub mod sidebar;
pub mod task_card;
pub mod task_dialog;
