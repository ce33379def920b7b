//! Shared state types for the egui UI.

mod input;
mod status;
mod view;

pub use input::*;
pub use status::*;
pub use view::*;

/// Top-level UI model consumed by the egui renderer.
///
/// The held classification result is not part of this struct: it belongs to
/// the controller and is only handed out by reference.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub input: InputState,
    /// Which visualization tab is showing.
    pub view: ViewState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            input: InputState::default(),
            view: ViewState::default(),
        }
    }
}
