//! Library exports for reuse in benchmarks and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted settings loaded from `config.toml`.
pub mod config;
/// Classification results, metrics and normalization.
pub mod detection;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared blocking HTTP agent and bounded body readers.
pub(crate) mod http_client;
/// Tracing setup with per-launch log files.
pub mod logging;
/// Prediction service client.
pub mod service;
