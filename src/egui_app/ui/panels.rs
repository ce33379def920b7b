//! Per-tab renderers. Each reads a view model and draws it; none of them
//! touch the controller.

mod basic;
mod comparison;
mod confidence;
mod empty;
mod performance;

use eframe::egui::{self, RichText};

use super::style;
use crate::egui_app::view_model::PanelView;

pub(super) fn render_panel(ui: &mut egui::Ui, panel: &PanelView) {
    match panel {
        PanelView::Empty(view) => empty::render(ui, *view),
        PanelView::Basic(view) => basic::render(ui, view),
        PanelView::Confidence(view) => confidence::render(ui, view),
        PanelView::Comparison(view) => comparison::render(ui, view),
        PanelView::Model(view) => performance::render(ui, view),
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(
        RichText::new(title)
            .strong()
            .size(15.0)
            .color(style::palette().text_primary),
    );
    ui.add_space(4.0);
}

fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(style::palette().text_muted));
}
