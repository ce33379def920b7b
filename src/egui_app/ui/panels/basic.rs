use eframe::egui::{self, RichText};

use super::{caption, section_heading};
use crate::detection::Prediction;
use crate::egui_app::ui::style;
use crate::egui_app::view_model::BasicView;

pub(super) fn render(ui: &mut egui::Ui, view: &BasicView) {
    let palette = style::palette();
    section_heading(ui, "Prediction");
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(view.prediction.label())
                .strong()
                .size(22.0)
                .color(style::prediction_color(view.prediction == Prediction::Bot)),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("{} confidence", view.confidence_label))
                .color(palette.text_primary),
        );
    });
    if let Some(origin) = view.actual_origin {
        let verdict = match view.origin_matches {
            Some(true) => "correct",
            _ => "incorrect",
        };
        caption(ui, &format!("Actual origin: {origin} ({verdict})"));
    }
    ui.add_space(10.0);
    section_heading(ui, "Metrics");
    if view.metrics.is_empty() {
        caption(ui, "The service returned no metrics for this text.");
        return;
    }
    egui::Grid::new("basic_metrics")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for row in &view.metrics {
                ui.label(RichText::new(&row.label).color(palette.text_muted));
                ui.label(RichText::new(&row.value).color(palette.text_primary));
                ui.end_row();
            }
        });
}
