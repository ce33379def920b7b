use super::NormalizedFeature;
use crate::detection::normalize::{self, ratio_floor_one};
use crate::detection::{ClassificationResult, MetricKey, Prediction, TextMetrics};

/// Hundredths of a percent in a full gauge.
pub const GAUGE_TOTAL: u32 = 10_000;

/// Confidence gauge split into filled and remaining slices.
///
/// Stored in hundredths of a percent so the two slices always add up to
/// exactly 100%.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaugeSlices {
    pub filled: u32,
    pub remaining: u32,
}

impl GaugeSlices {
    pub fn from_confidence(confidence: f64) -> Self {
        let filled = ((confidence * 100.0).round().clamp(0.0, GAUGE_TOTAL as f64)) as u32;
        Self {
            filled,
            remaining: GAUGE_TOTAL - filled,
        }
    }

    pub fn filled_fraction(&self) -> f64 {
        self.filled as f64 / GAUGE_TOTAL as f64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyMetric {
    pub name: &'static str,
    pub value: String,
}

/// "Prediction & Features" tab content.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfidenceView {
    pub prediction: Prediction,
    pub confidence_label: String,
    pub gauge: GaugeSlices,
    pub feature_importance: Vec<NormalizedFeature>,
    pub key_metrics: Vec<KeyMetric>,
}

impl ConfidenceView {
    pub fn from_result(result: &ClassificationResult) -> Self {
        Self {
            prediction: result.prediction(),
            confidence_label: format!("{:.2}%", result.confidence()),
            gauge: GaugeSlices::from_confidence(result.confidence()),
            feature_importance: feature_importance(result.metrics()),
            key_metrics: key_metrics(result.metrics()),
        }
    }
}

/// Importance scores for the features the classifier leans on most.
pub fn feature_importance(metrics: &TextMetrics) -> Vec<NormalizedFeature> {
    let word_char_ratio = ratio_floor_one(
        metrics.value_or_zero(MetricKey::WordCount),
        metrics.value_or_zero(MetricKey::CharCount),
    );
    vec![
        NormalizedFeature::new(
            "Hashtag Count",
            normalize::HASHTAG_COUNT.apply(metrics.value_or_zero(MetricKey::HashtagCount)),
        ),
        NormalizedFeature::new(
            "Word/Char Ratio",
            normalize::WORD_CHAR_RATIO.apply(word_char_ratio),
        ),
        NormalizedFeature::new(
            "Link Count",
            normalize::LINK_COUNT.apply(metrics.value_or_zero(MetricKey::LinkCount)),
        ),
        NormalizedFeature::new(
            "Sentiment",
            normalize::SENTIMENT_STRENGTH
                .apply(metrics.value_or_zero(MetricKey::SentimentPolarity).abs()),
        ),
        NormalizedFeature::new(
            "Exclamation Count",
            normalize::EXCLAMATION_COUNT.apply(metrics.value_or_zero(MetricKey::ExclamationCount)),
        ),
    ]
}

fn key_metrics(metrics: &TextMetrics) -> Vec<KeyMetric> {
    let count = |name, key| KeyMetric {
        name,
        value: format!("{:.0}", metrics.value_or_zero(key)),
    };
    vec![
        count("Characters", MetricKey::CharCount),
        count("Words", MetricKey::WordCount),
        count("Exclamations", MetricKey::ExclamationCount),
        count("Hashtags", MetricKey::HashtagCount),
        count("Mentions", MetricKey::MentionCount),
        count("Links", MetricKey::LinkCount),
        KeyMetric {
            name: "Sentiment",
            value: format!("{:.2}", metrics.value_or_zero(MetricKey::SentimentPolarity)),
        },
    ]
}
