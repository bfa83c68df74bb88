//! Local UI chrome state (display mode).
//!
//! DESIGN
//! ======
//! Dark mode is an orthogonal overlay: it transitions independently of the
//! catalog fetch lifecycle and stays functional in every catalog phase.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the display-mode toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Initial state, hydrated from the stored preference.
    pub fn from_preference(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Flip the display mode. No debouncing, no guard against rapid toggling.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
