use eframe::egui::{self, Frame, Margin, RichText};

use super::super::EguiApp;
use super::super::style;
use super::buttons::{action_button, menu_heading};

impl EguiApp {
    pub(in crate::egui_app::ui) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(10, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("BotLens")
                            .strong()
                            .size(18.0)
                            .color(palette.accent_mint),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new("Bot or human? Classify a tweet or post")
                            .color(palette.text_muted),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.render_options_menu(ui);
                    });
                });
            });
    }

    fn render_options_menu(&mut self, ui: &mut egui::Ui) {
        let mut close_menu = false;
        ui.menu_button("Options", |ui| {
            menu_heading(ui, "Folders");
            if ui.add(action_button("Open config folder")).clicked() {
                self.controller.open_config_folder();
                close_menu = true;
            }
            if ui.add(action_button("Open log folder")).clicked() {
                self.controller.open_log_folder();
                close_menu = true;
            }
            ui.separator();
            if ui.add(action_button("Quit")).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                close_menu = true;
            }
            if close_menu {
                ui.close();
            }
        });
        ui.add_space(10.0);
        const APP_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
        ui.label(RichText::new(APP_VERSION).color(style::palette().text_muted));
    }
}
