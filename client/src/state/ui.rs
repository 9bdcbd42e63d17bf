//! Local UI chrome state (menus and dialogs).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed flags for overlays that trap focus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub nav_open: bool,
    pub demo_dialog_open: bool,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Close every overlay, e.g. after navigation.
    pub fn close_overlays(&mut self) {
        self.nav_open = false;
        self.demo_dialog_open = false;
    }

    pub fn any_overlay_open(&self) -> bool {
        self.nav_open || self.demo_dialog_open
    }
}
