//! UI chrome state: dark mode and the sidebar.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}
