//! egui renderer for the application UI.

mod charts;
mod chrome;
mod input_panel;
mod panels;
pub mod style;
mod tabs;
mod update;

use crate::egui_app::controller::EguiController;
use eframe::egui;

/// Smallest window that still fits the input panel and one chart column.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(760.0, 560.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(mut controller: EguiController) -> Self {
        controller.ui.input.focus_requested = true;
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }
}
