use eframe::egui::{self, Color32, RichText};

use super::{caption, section_heading};
use crate::egui_app::ui::charts::{self, Series};
use crate::egui_app::ui::style;
use crate::egui_app::view_model::PerformanceView;
use crate::egui_app::view_model::performance::rate_label;

pub(super) fn render(ui: &mut egui::Ui, view: &PerformanceView) {
    let palette = style::palette();
    section_heading(ui, "Model performance over time");
    let months: Vec<&str> = view.history.iter().map(|point| point.month).collect();
    let series = [
        Series {
            name: "Accuracy",
            color: palette.accent_mint,
            values: view.history.iter().map(|point| point.accuracy).collect(),
        },
        Series {
            name: "Precision",
            color: palette.accent_ice,
            values: view.history.iter().map(|point| point.precision).collect(),
        },
        Series {
            name: "Recall",
            color: palette.accent_copper,
            values: view.history.iter().map(|point| point.recall).collect(),
        },
    ];
    charts::line_chart(ui, &months, &series, (0.7, 1.0));
    let legend: Vec<(&str, Color32)> = series
        .iter()
        .map(|entry| (entry.name, entry.color))
        .collect();
    charts::legend(ui, &legend);
    ui.add_space(12.0);

    section_heading(ui, "Confusion matrix");
    caption(
        ui,
        &format!("Total predictions: {}", view.matrix.total()),
    );
    let colors = [
        palette.success,
        palette.accent_copper,
        palette.warning,
        palette.accent_ice,
    ];
    let slices = view.matrix.slices();
    let bar: Vec<(&str, Option<f64>, Color32)> = slices
        .iter()
        .zip(colors)
        .map(|(slice, color)| (slice.name, slice.share, color))
        .collect();
    charts::share_bar(ui, &bar);
    ui.add_space(6.0);
    egui::Grid::new("confusion_matrix")
        .num_columns(3)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (slice, color) in slices.iter().zip(colors) {
                ui.label(RichText::new(slice.name).color(color));
                ui.label(RichText::new(slice.count.to_string()).color(palette.text_primary));
                ui.label(RichText::new(rate_label(slice.share)).color(palette.text_muted));
                ui.end_row();
            }
        });
    ui.add_space(6.0);
    egui::Grid::new("model_summary")
        .num_columns(2)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (name, value) in view.summary() {
                ui.label(RichText::new(name).color(palette.text_muted));
                ui.label(RichText::new(value).strong().color(palette.text_primary));
                ui.end_row();
            }
        });
    caption(ui, "Illustrative figures; not computed from the current text.");
}
