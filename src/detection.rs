//! Classification results and the metric math that feeds the panels.
//!
//! Nothing in here touches the network or the UI: the service layer produces
//! [`ClassificationResult`] values and the view models read them.

/// Named text metrics returned alongside a prediction.
pub mod metrics;
/// Bounded rescaling of raw metrics into display scores.
pub mod normalize;
/// Immutable classification result model.
pub mod result;
/// Local text statistics computed without the prediction service.
pub mod text_stats;

pub use metrics::{MetricKey, TextMetrics};
pub use normalize::{NormalizationPolicy, normalize};
pub use result::{ClassificationResult, InvalidResult, Origin, Prediction, RandomSample};
