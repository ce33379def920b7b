//! Helpers to convert classification results into egui-facing view structs.
//!
//! Everything here is pure and recomputed each frame from the held result.

pub mod basic;
pub mod comparison;
pub mod confidence;
pub mod performance;

pub use basic::BasicView;
pub use comparison::ComparisonView;
pub use confidence::ConfidenceView;
pub use performance::PerformanceView;

use crate::detection::ClassificationResult;
use crate::egui_app::state::ActiveView;

/// A display score in `[0, 1]` with its label.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedFeature {
    pub name: &'static str,
    pub value: f64,
}

impl NormalizedFeature {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

/// Content of the visualization area for one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelView {
    /// The tab needs a classification and none is held yet.
    Empty(ActiveView),
    Basic(BasicView),
    Confidence(ConfidenceView),
    Comparison(ComparisonView),
    Model(PerformanceView),
}

/// Build the panel for `view` from the held result.
pub fn panel_for(view: ActiveView, result: Option<&ClassificationResult>) -> PanelView {
    match (view, result) {
        (ActiveView::Model, _) => PanelView::Model(PerformanceView::reference()),
        (ActiveView::Basic, Some(result)) => PanelView::Basic(BasicView::from_result(result)),
        (ActiveView::Confidence, Some(result)) => {
            PanelView::Confidence(ConfidenceView::from_result(result))
        }
        (ActiveView::Comparison, Some(result)) => {
            PanelView::Comparison(ComparisonView::from_result(result))
        }
        (view, None) => PanelView::Empty(view),
    }
}

/// Format a ratio in `[0, 1]` as a percentage with one decimal.
pub fn percent_label(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
