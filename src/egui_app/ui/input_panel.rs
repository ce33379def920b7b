use eframe::egui::{self, Frame, Margin, RichText};

use super::EguiApp;
use super::chrome::action_button;
use super::style;

const INPUT_ID: &str = "classify_input";

impl EguiApp {
    pub(super) fn render_input_panel(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(style::compartment_fill())
            .stroke(style::section_stroke())
            .inner_margin(Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Text to analyse")
                        .strong()
                        .color(palette.text_primary),
                );
                ui.add_space(4.0);
                let response = ui.add(
                    egui::TextEdit::multiline(&mut self.controller.ui.input.text)
                        .id_salt(INPUT_ID)
                        .hint_text("Paste a tweet or post here...")
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                if self.controller.ui.input.focus_requested {
                    response.request_focus();
                    self.controller.ui.input.focus_requested = false;
                }
                let submit_shortcut = response.has_focus()
                    && ui.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Enter));
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let classify = ui
                        .add(action_button("Classify"))
                        .on_hover_text("Ctrl+Enter");
                    if classify.clicked() || submit_shortcut {
                        let _ = self.controller.submit();
                    }
                    if ui.add(action_button("Random example")).clicked() {
                        self.controller.fetch_random_sample();
                    }
                    ui.add_space(12.0);
                    self.render_local_preview(ui);
                });
            });
    }

    fn render_local_preview(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let stats = self.controller.local_preview();
        let parts = [
            ("chars", stats.char_count),
            ("words", stats.word_count),
            ("#", stats.hashtag_count),
            ("@", stats.mention_count),
            ("links", stats.link_count),
            ("!", stats.exclamation_count),
        ];
        for (label, value) in parts {
            ui.label(RichText::new(format!("{label} {value}")).color(palette.text_muted));
        }
    }
}
