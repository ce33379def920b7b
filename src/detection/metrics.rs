use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::result::InvalidResult;

const POS_PREFIX: &str = "pos_";
const POS_SUFFIX: &str = "_count";

/// Metric keys the panels know how to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKey {
    CharCount,
    WordCount,
    AvgWordLength,
    ExclamationCount,
    HashtagCount,
    MentionCount,
    LinkCount,
    SentimentPolarity,
}

impl MetricKey {
    /// Every known key, in display order.
    pub const ALL: [MetricKey; 8] = [
        MetricKey::CharCount,
        MetricKey::WordCount,
        MetricKey::AvgWordLength,
        MetricKey::ExclamationCount,
        MetricKey::HashtagCount,
        MetricKey::MentionCount,
        MetricKey::LinkCount,
        MetricKey::SentimentPolarity,
    ];

    /// Wire name used by the prediction service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CharCount => "char_count",
            Self::WordCount => "word_count",
            Self::AvgWordLength => "avg_word_length",
            Self::ExclamationCount => "exclamation_count",
            Self::HashtagCount => "hashtag_count",
            Self::MentionCount => "mention_count",
            Self::LinkCount => "link_count",
            Self::SentimentPolarity => "sentiment_polarity",
        }
    }

    fn is_count(self) -> bool {
        !matches!(self, Self::SentimentPolarity)
    }
}

/// Named numeric features extracted from a piece of text.
///
/// Values are kept exactly as received; a missing key stays missing. Callers
/// that only need something to draw use [`TextMetrics::value_or_zero`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextMetrics {
    values: BTreeMap<String, f64>,
}

impl TextMetrics {
    /// Build metrics from raw pairs, rejecting values that break the metric invariants.
    pub fn from_values(
        values: impl IntoIterator<Item = (String, f64)>,
    ) -> Result<Self, InvalidResult> {
        let metrics = Self {
            values: values.into_iter().collect(),
        };
        metrics.validate()?;
        Ok(metrics)
    }

    /// Metrics computed locally from known keys. Not validated.
    pub(super) fn from_known(values: impl IntoIterator<Item = (MetricKey, f64)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key.as_str().to_string(), value))
                .collect(),
        }
    }

    /// Check the invariants on metrics that arrived over the wire.
    pub fn validate(&self) -> Result<(), InvalidResult> {
        for (name, value) in &self.values {
            if !value.is_finite() {
                return Err(InvalidResult::NonFiniteMetric(name.clone()));
            }
        }
        for key in MetricKey::ALL.into_iter().filter(|key| key.is_count()) {
            if let Some(value) = self.get(key) {
                if value < 0.0 {
                    return Err(InvalidResult::NegativeCount {
                        name: key.as_str().to_string(),
                        value,
                    });
                }
            }
        }
        for (name, value) in self.pos_counts() {
            if value < 0.0 {
                return Err(InvalidResult::NegativeCount {
                    name: format!("{POS_PREFIX}{name}{POS_SUFFIX}"),
                    value,
                });
            }
        }
        if let Some(polarity) = self.get(MetricKey::SentimentPolarity) {
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(InvalidResult::PolarityOutOfRange(polarity));
            }
        }
        Ok(())
    }

    /// Value for a known key, if the service sent it.
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.values.get(key.as_str()).copied()
    }

    /// Value for an arbitrary wire name, if present.
    pub fn get_named(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Display value for a known key; missing keys read as zero.
    pub fn value_or_zero(&self, key: MetricKey) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Part-of-speech counts keyed by lowercase tag (`noun`, `verb`, ...).
    pub fn pos_counts(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().filter_map(|(name, value)| {
            let tag = name.strip_prefix(POS_PREFIX)?.strip_suffix(POS_SUFFIX)?;
            (!tag.is_empty()).then_some((tag, *value))
        })
    }

    /// All metrics in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
