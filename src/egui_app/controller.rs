//! Bridges the prediction service to the egui UI.
//!
//! The controller owns the held classification result and the worker threads
//! that talk to the service. The renderer only reads through it.

mod folders;
mod jobs;
mod requests;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use jobs::RequestId;
pub use requests::SubmitError;

use crate::detection::ClassificationResult;
use crate::detection::text_stats::TextStats;
use crate::egui_app::state::{ActiveView, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::egui_app::view_model::{self, PanelView};
use crate::service::PredictionService;
use jobs::ControllerJobs;
use std::sync::Arc;

/// Maintains app state and bridges the prediction service to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    service: Arc<dyn PredictionService>,
    result: Option<Arc<ClassificationResult>>,
    jobs: ControllerJobs,
}

impl EguiController {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self {
            ui: UiState::default(),
            service,
            result: None,
            jobs: ControllerJobs::new(),
        }
    }

    /// The most recently applied classification, if any.
    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_deref()
    }

    pub fn shared_result(&self) -> Option<Arc<ClassificationResult>> {
        self.result.clone()
    }

    /// Switch the visualization tab. The held result is untouched.
    pub fn select_view(&mut self, view: ActiveView) {
        if self.ui.view.select(view) {
            tracing::debug!(view = view.id(), "Switched visualization tab");
        }
    }

    /// Content for the active tab, rebuilt from the held result.
    pub fn panel(&self) -> PanelView {
        view_model::panel_for(self.ui.view.active(), self.result())
    }

    /// Locally computed counts for whatever is currently typed.
    pub fn local_preview(&self) -> TextStats {
        TextStats::from_text(&self.ui.input.text)
    }

    /// Whether any worker has yet to report back.
    pub fn has_pending_requests(&self) -> bool {
        self.jobs.in_flight() > 0
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
