use eframe::egui::{self, RichText};

use super::EguiApp;
use super::style;
use crate::egui_app::state::ActiveView;

impl EguiApp {
    pub(super) fn render_tabs(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let active = self.controller.ui.view.active();
        ui.horizontal(|ui| {
            for view in ActiveView::ALL {
                let selected = view == active;
                let color = if selected {
                    palette.accent_mint
                } else {
                    palette.text_muted
                };
                let response = ui.push_id(view.id(), |ui| {
                    ui.selectable_label(selected, RichText::new(view.label()).color(color))
                });
                if response.inner.clicked() {
                    self.controller.select_view(view);
                }
            }
        });
        ui.separator();
    }
}
