use super::*;

#[test]
fn ui_state_default_sidebar_closed() {
    assert!(!UiState::default().sidebar_open);
}

#[test]
fn ui_state_default_viewer_open() {
    assert!(UiState::default().viewer_open);
}

#[test]
fn toggle_viewer_flips() {
    let mut ui = UiState::default();
    ui.toggle_viewer();
    assert!(!ui.viewer_open);
    ui.toggle_viewer();
    assert!(ui.viewer_open);
}
