//! Local UI chrome state (header and mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the lead form and content
//! lookups. `UiState` is provided as an `RwSignal` context from `App`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset (px) after which the header turns opaque.
pub const HEADER_SOLID_AFTER_PX: f64 = 50.0;

/// UI state for the fixed header and its mobile menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub header_solid: bool,
    pub mobile_menu_open: bool,
}

impl UiState {
    /// Update the header style for the current scroll position. Returns
    /// whether the style changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let solid = scroll_y > HEADER_SOLID_AFTER_PX;
        let changed = solid != self.header_solid;
        self.header_solid = solid;
        changed
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Following any menu link closes the menu.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    #[must_use]
    pub fn header_class(&self) -> &'static str {
        if self.header_solid { "site-header site-header--solid" } else { "site-header" }
    }
}
