//! Local UI chrome state (sidebar, document viewer).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session state so layout
//! controls can evolve independently of the conversation.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug)]
pub struct UiState {
    /// Sidebar visibility on narrow screens; always shown on wide screens.
    pub sidebar_open: bool,
    /// Whether the document viewer panel is expanded.
    pub viewer_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: false, viewer_open: true }
    }
}

impl UiState {
    pub fn toggle_viewer(&mut self) {
        self.viewer_open = !self.viewer_open;
    }
}
