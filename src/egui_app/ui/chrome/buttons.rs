use eframe::egui::{self, RichText};

use crate::egui_app::ui::style;

pub(in crate::egui_app::ui) fn action_button(label: &str) -> egui::Button<'_> {
    egui::Button::new(RichText::new(label).color(style::palette().text_primary))
}

pub(super) fn menu_heading(ui: &mut egui::Ui, label: &str) {
    ui.label(RichText::new(label).color(style::palette().text_muted));
}
