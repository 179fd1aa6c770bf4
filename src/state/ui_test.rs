use super::*;

#[test]
fn ui_defaults_to_light_mode_with_sidebar_open() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
}
