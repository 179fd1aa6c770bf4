//! Page components, one per route.

pub mod creative;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod task_board;
pub mod timeline;
pub mod todos;
