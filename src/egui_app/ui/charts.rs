//! Small painter-drawn charts used by the visualization panels.
//!
//! Every function allocates its own rect in the current layout and draws with
//! the shared palette. Inputs are already normalized by the view models.

use std::f32::consts::{PI, TAU};

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2, pos2,
    vec2,
};

use super::style;

const LABEL_FONT: f32 = 11.0;

/// One named series for multi-series charts.
pub(super) struct Series<'a> {
    pub name: &'a str,
    pub color: Color32,
    pub values: Vec<f64>,
}

fn label_font() -> FontId {
    FontId::proportional(LABEL_FONT)
}

fn frame_rect(ui: &mut egui::Ui, height: f32) -> Rect {
    let width = ui.available_width().max(120.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    ui.painter()
        .rect_filled(rect, 0.0, style::compartment_fill());
    ui.painter()
        .rect_stroke(rect, 0.0, style::inner_border(), StrokeKind::Inside);
    rect
}

/// Semicircular gauge filled left to right by `fraction`.
pub(super) fn half_gauge(ui: &mut egui::Ui, fraction: f64, color: Color32, caption: &str) {
    let palette = style::palette();
    let rect = frame_rect(ui, 150.0);
    let painter = ui.painter_at(rect);
    let radius = (rect.width() * 0.35).min(rect.height() - 40.0).max(20.0);
    let center = pos2(rect.center().x, rect.bottom() - 24.0);
    let thickness = radius * 0.28;
    let arc = |from: f32, to: f32| -> Vec<Pos2> {
        let steps = 48;
        (0..=steps)
            .map(|step| {
                let t = from + (to - from) * step as f32 / steps as f32;
                let angle = PI + t * PI;
                center + vec2(angle.cos(), angle.sin()) * radius
            })
            .collect()
    };
    let fraction = fraction.clamp(0.0, 1.0) as f32;
    painter.add(Shape::line(
        arc(0.0, 1.0),
        Stroke::new(thickness, palette.grid_strong),
    ));
    if fraction > 0.0 {
        painter.add(Shape::line(arc(0.0, fraction), Stroke::new(thickness, color)));
    }
    painter.text(
        center - vec2(0.0, radius * 0.25),
        Align2::CENTER_CENTER,
        caption,
        FontId::proportional(20.0),
        palette.text_primary,
    );
}

/// Horizontal bars for values in `[0, 1]`.
pub(super) fn horizontal_bars(ui: &mut egui::Ui, rows: &[(&str, f64)], color: Color32) {
    let palette = style::palette();
    let row_height = 22.0;
    let rect = frame_rect(ui, row_height * rows.len() as f32 + 12.0);
    let painter = ui.painter_at(rect);
    let label_width = (rect.width() * 0.35).min(150.0);
    let bar_left = rect.left() + label_width + 8.0;
    let bar_max = (rect.right() - 56.0 - bar_left).max(10.0);
    for (index, (label, value)) in rows.iter().enumerate() {
        let y = rect.top() + 6.0 + row_height * index as f32;
        let mid = y + row_height / 2.0;
        painter.text(
            pos2(rect.left() + 8.0, mid),
            Align2::LEFT_CENTER,
            *label,
            label_font(),
            palette.text_primary,
        );
        let track = Rect::from_min_size(pos2(bar_left, y + 4.0), vec2(bar_max, row_height - 8.0));
        painter.rect_filled(track, 0.0, palette.grid_soft);
        let filled = Rect::from_min_size(
            track.min,
            vec2(bar_max * value.clamp(0.0, 1.0) as f32, track.height()),
        );
        painter.rect_filled(filled, 0.0, color);
        painter.text(
            pos2(track.right() + 6.0, mid),
            Align2::LEFT_CENTER,
            format!("{value:.2}"),
            label_font(),
            palette.text_muted,
        );
    }
}

/// Radar chart over unit-range axes, one polygon per series.
pub(super) fn radar(ui: &mut egui::Ui, axis_labels: &[&str], series: &[Series<'_>]) {
    let palette = style::palette();
    let rect = frame_rect(ui, 300.0);
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = (rect.width().min(rect.height()) / 2.0 - 48.0).max(20.0);
    let count = axis_labels.len().max(1);
    let direction = |index: usize| {
        let angle = -PI / 2.0 + TAU * index as f32 / count as f32;
        vec2(angle.cos(), angle.sin())
    };
    for ring in 1..=4 {
        let r = radius * ring as f32 / 4.0;
        let points: Vec<Pos2> = (0..count).map(|i| center + direction(i) * r).collect();
        painter.add(Shape::closed_line(points, Stroke::new(1.0, palette.grid_soft)));
    }
    for (index, label) in axis_labels.iter().enumerate() {
        let dir = direction(index);
        painter.line_segment(
            [center, center + dir * radius],
            Stroke::new(1.0, palette.grid_strong),
        );
        let anchor = if dir.x > 0.2 {
            Align2::LEFT_CENTER
        } else if dir.x < -0.2 {
            Align2::RIGHT_CENTER
        } else {
            Align2::CENTER_CENTER
        };
        painter.text(
            center + dir * (radius + 14.0),
            anchor,
            *label,
            label_font(),
            palette.text_primary,
        );
    }
    for entry in series {
        let points: Vec<Pos2> = entry
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| center + direction(i) * radius * value.clamp(0.0, 1.0) as f32)
            .collect();
        painter.add(Shape::convex_polygon(
            points.clone(),
            entry.color.gamma_multiply(0.18),
            Stroke::NONE,
        ));
        painter.add(Shape::closed_line(points, Stroke::new(2.0, entry.color)));
    }
}

/// Vertical grouped bars, one group per category.
///
/// `highlight` outlines a single category, e.g. the bucket the current text
/// falls into.
pub(super) fn grouped_bars(
    ui: &mut egui::Ui,
    categories: &[&str],
    series: &[Series<'_>],
    max_value: f64,
    highlight: Option<usize>,
) {
    let palette = style::palette();
    let rect = frame_rect(ui, 220.0);
    let painter = ui.painter_at(rect);
    let plot = Rect::from_min_max(
        rect.min + vec2(8.0, 10.0),
        rect.max - vec2(8.0, 34.0),
    );
    let groups = categories.len().max(1);
    let group_width = plot.width() / groups as f32;
    let bar_width = (group_width * 0.8) / series.len().max(1) as f32;
    let max_value = if max_value > 0.0 { max_value } else { 1.0 };
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, palette.grid_strong),
    );
    for (group, label) in categories.iter().enumerate() {
        let group_left = plot.left() + group_width * group as f32;
        if highlight == Some(group) {
            let band = Rect::from_min_max(
                pos2(group_left, plot.top()),
                pos2(group_left + group_width, plot.bottom()),
            );
            painter.rect_filled(band, 0.0, palette.grid_soft);
            painter.rect_stroke(
                band,
                0.0,
                Stroke::new(1.0, style::current_series()),
                StrokeKind::Inside,
            );
        }
        for (index, entry) in series.iter().enumerate() {
            let value = entry.values.get(group).copied().unwrap_or(0.0);
            let height = plot.height() * (value / max_value).clamp(0.0, 1.0) as f32;
            let x = group_left + group_width * 0.1 + bar_width * index as f32;
            let bar = Rect::from_min_max(
                pos2(x, plot.bottom() - height),
                pos2(x + bar_width - 1.0, plot.bottom()),
            );
            painter.rect_filled(bar, 0.0, entry.color);
        }
        painter.text(
            pos2(group_left + group_width / 2.0, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            *label,
            FontId::proportional(9.5),
            palette.text_muted,
        );
    }
}

/// Line chart with one polyline per series over a fixed y range.
pub(super) fn line_chart(
    ui: &mut egui::Ui,
    x_labels: &[&str],
    series: &[Series<'_>],
    y_range: (f64, f64),
) {
    let palette = style::palette();
    let rect = frame_rect(ui, 220.0);
    let painter = ui.painter_at(rect);
    let plot = Rect::from_min_max(rect.min + vec2(40.0, 12.0), rect.max - vec2(16.0, 28.0));
    let (y_min, y_max) = y_range;
    let span = (y_max - y_min).max(f64::EPSILON);
    let to_y = |value: f64| {
        let t = ((value - y_min) / span).clamp(0.0, 1.0) as f32;
        plot.bottom() - t * plot.height()
    };
    let steps = x_labels.len().saturating_sub(1).max(1) as f32;
    let to_x = |index: usize| plot.left() + plot.width() * index as f32 / steps;
    for tick in 0..=3 {
        let value = y_min + span * tick as f64 / 3.0;
        let y = to_y(value);
        painter.line_segment(
            [pos2(plot.left(), y), pos2(plot.right(), y)],
            Stroke::new(1.0, palette.grid_soft),
        );
        painter.text(
            pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{value:.2}"),
            label_font(),
            palette.text_muted,
        );
    }
    for (index, label) in x_labels.iter().enumerate() {
        painter.text(
            pos2(to_x(index), plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            *label,
            label_font(),
            palette.text_muted,
        );
    }
    for entry in series {
        let points: Vec<Pos2> = entry
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| pos2(to_x(index), to_y(*value)))
            .collect();
        for point in &points {
            painter.circle_filled(*point, 3.0, entry.color);
        }
        painter.add(Shape::line(points, Stroke::new(2.0, entry.color)));
    }
}

/// Single stacked bar split by share; `None` shares draw nothing.
pub(super) fn share_bar(ui: &mut egui::Ui, slices: &[(&str, Option<f64>, Color32)]) {
    let palette = style::palette();
    let rect = frame_rect(ui, 40.0);
    let painter = ui.painter_at(rect);
    let track = rect.shrink(8.0);
    let mut left = track.left();
    for (name, share, color) in slices {
        let Some(share) = share else {
            continue;
        };
        let width = track.width() * share.clamp(0.0, 1.0) as f32;
        let segment = Rect::from_min_size(pos2(left, track.top()), vec2(width, track.height()));
        painter.rect_filled(segment, 0.0, *color);
        if width > 60.0 {
            painter.text(
                segment.center(),
                Align2::CENTER_CENTER,
                format!("{name} {:.0}%", share * 100.0),
                label_font(),
                palette.bg_primary,
            );
        }
        left += width;
    }
}

/// Row of colour swatches with labels.
pub(super) fn legend(ui: &mut egui::Ui, entries: &[(&str, Color32)]) {
    let palette = style::palette();
    ui.horizontal_wrapped(|ui| {
        for (label, color) in entries {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 0.0, *color);
            ui.label(egui::RichText::new(*label).color(palette.text_muted).size(LABEL_FONT));
            ui.add_space(8.0);
        }
    });
}
