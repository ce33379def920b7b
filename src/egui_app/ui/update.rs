use std::time::Duration;

use eframe::egui::{self, Frame, Margin};

use super::EguiApp;
use super::style;

/// How often to poll workers while a request is outstanding.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_top_bar(ctx);
        self.render_status(ctx);
        self.render_central(ctx);
        if self.controller.has_pending_requests() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}

impl EguiApp {
    fn render_central(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(12, 10)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("central_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_input_panel(ui);
                        ui.add_space(12.0);
                        self.render_tabs(ui);
                        ui.add_space(8.0);
                        let panel = self.controller.panel();
                        super::panels::render_panel(ui, &panel);
                    });
            });
    }
}
