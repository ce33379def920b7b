//! Entry point for the egui-based BotLens UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use botlens::config;
use botlens::egui_app::controller::EguiController;
use botlens::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use botlens::logging;
use botlens::service::{HttpPredictionService, PredictionService};
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1080.0, 820.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "BotLens",
        native_options,
        Box::new(|_cc| {
            let app: Box<dyn eframe::App> = match build_controller() {
                Ok(controller) => Box::new(EguiApp::new(controller)),
                Err(message) => Box::new(LaunchError { message }),
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

fn build_controller() -> Result<EguiController, String> {
    let cfg = config::load_or_default().map_err(|err| {
        tracing::error!("Failed to load config: {err}");
        format!("Failed to load config: {err}")
    })?;
    let service = HttpPredictionService::from_settings(&cfg.service).map_err(|err| {
        tracing::error!("Invalid service settings: {err}");
        format!("Invalid service settings: {err}")
    })?;
    tracing::info!(
        classify = service.classify_url(),
        random = service.random_url(),
        "Using prediction service"
    );
    let service: Arc<dyn PredictionService> = Arc::new(service);
    Ok(EguiController::new(service))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start BotLens");
                ui.label(&self.message);
            });
        });
    }
}
