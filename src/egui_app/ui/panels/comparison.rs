use eframe::egui;

use super::{caption, section_heading};
use crate::egui_app::ui::charts::{self, Series};
use crate::egui_app::ui::style;
use crate::egui_app::view_model::ComparisonView;

pub(super) fn render(ui: &mut egui::Ui, view: &ComparisonView) {
    let legend = [
        ("Human", style::human_series()),
        ("Bot", style::bot_series()),
        ("This text", style::current_series()),
    ];

    section_heading(ui, "Bot vs human metrics");
    let labels: Vec<&str> = view.axes.iter().map(|axis| axis.current.name).collect();
    charts::radar(
        ui,
        &labels,
        &[
            Series {
                name: "Human",
                color: style::human_series(),
                values: view.axes.iter().map(|axis| axis.human).collect(),
            },
            Series {
                name: "Bot",
                color: style::bot_series(),
                values: view.axes.iter().map(|axis| axis.bot).collect(),
            },
            Series {
                name: "This text",
                color: style::current_series(),
                values: view.axes.iter().map(|axis| axis.current.value).collect(),
            },
        ],
    );
    charts::legend(ui, &legend);
    ui.add_space(12.0);

    section_heading(ui, "Sentiment distribution");
    caption(
        ui,
        &format!(
            "This text falls in the {} range.",
            view.sentiment_bucket.label()
        ),
    );
    let ranges: Vec<&str> = view
        .sentiment_reference
        .iter()
        .map(|bucket| bucket.label)
        .collect();
    charts::grouped_bars(
        ui,
        &ranges,
        &[
            Series {
                name: "Human",
                color: style::human_series(),
                values: view.sentiment_reference.iter().map(|b| b.human).collect(),
            },
            Series {
                name: "Bot",
                color: style::bot_series(),
                values: view.sentiment_reference.iter().map(|b| b.bot).collect(),
            },
        ],
        40.0,
        Some(view.sentiment_bucket.index()),
    );
    charts::legend(ui, &legend[..2]);
    ui.add_space(12.0);

    section_heading(ui, "Parts of speech");
    if !view.pos_from_metrics {
        caption(ui, "Sample distribution; the service did not tag this text.");
    }
    let names: Vec<&str> = view.pos_shares.iter().map(|share| share.name).collect();
    let series = [
        Series {
            name: "Human",
            color: style::human_series(),
            values: view.pos_shares.iter().map(|share| share.human).collect(),
        },
        Series {
            name: "Bot",
            color: style::bot_series(),
            values: view.pos_shares.iter().map(|share| share.bot).collect(),
        },
        Series {
            name: "This text",
            color: style::current_series(),
            values: view.pos_shares.iter().map(|share| share.current).collect(),
        },
    ];
    let max = series
        .iter()
        .flat_map(|entry| entry.values.iter().copied())
        .fold(0.0, f64::max);
    charts::grouped_bars(ui, &names, &series, max, None);
    let legend_entries: Vec<(&str, egui::Color32)> =
        series.iter().map(|entry| (entry.name, entry.color)).collect();
    charts::legend(ui, &legend_entries);
}
