use eframe::egui::{self, RichText};

use crate::egui_app::state::ActiveView;
use crate::egui_app::ui::style;

pub(super) fn render(ui: &mut egui::Ui, view: ActiveView) {
    let palette = style::palette();
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(
            RichText::new(view.label())
                .strong()
                .color(palette.text_primary),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new("No prediction yet. Classify some text or load a random example.")
                .color(palette.text_muted),
        );
    });
}
