use eframe::egui::{self, RichText};

use super::{caption, section_heading};
use crate::detection::Prediction;
use crate::egui_app::ui::{charts, style};
use crate::egui_app::view_model::ConfidenceView;

pub(super) fn render(ui: &mut egui::Ui, view: &ConfidenceView) {
    let palette = style::palette();
    ui.columns(2, |columns| {
        let ui = &mut columns[0];
        section_heading(ui, &format!("Prediction: {}", view.prediction));
        charts::half_gauge(
            ui,
            view.gauge.filled_fraction(),
            style::prediction_color(view.prediction == Prediction::Bot),
            &view.confidence_label,
        );
        caption(ui, "Model confidence in this prediction.");

        let ui = &mut columns[1];
        section_heading(ui, "Feature importance");
        let rows: Vec<(&str, f64)> = view
            .feature_importance
            .iter()
            .map(|feature| (feature.name, feature.value))
            .collect();
        charts::horizontal_bars(ui, &rows, style::current_series());
        caption(ui, "How strongly each feature pushes this text's score.");
    });
    ui.add_space(10.0);
    section_heading(ui, "Key metrics");
    egui::Grid::new("confidence_key_metrics")
        .num_columns(view.key_metrics.len())
        .spacing([18.0, 2.0])
        .show(ui, |ui| {
            for metric in &view.key_metrics {
                ui.label(RichText::new(metric.name).color(palette.text_muted));
            }
            ui.end_row();
            for metric in &view.key_metrics {
                ui.label(
                    RichText::new(&metric.value)
                        .strong()
                        .color(palette.text_primary),
                );
            }
            ui.end_row();
        });
}
