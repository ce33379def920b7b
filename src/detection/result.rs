use std::fmt;

use thiserror::Error;

use super::metrics::TextMetrics;

/// Predicted author class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prediction {
    Human,
    Bot,
}

impl Prediction {
    /// Parse the service label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Result<Self, InvalidResult> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("human") {
            Ok(Self::Human)
        } else if trimmed.eq_ignore_ascii_case("bot") {
            Ok(Self::Bot)
        } else {
            Err(InvalidResult::UnknownLabel(trimmed.to_string()))
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Bot => "Bot",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ground-truth origin reported for server-chosen samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    Human,
    Bot,
}

impl Origin {
    pub fn parse(label: &str) -> Result<Self, InvalidResult> {
        match Prediction::parse(label)? {
            Prediction::Human => Ok(Self::Human),
            Prediction::Bot => Ok(Self::Bot),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Bot => "Bot",
        }
    }
}

/// Reasons a classification payload cannot become a [`ClassificationResult`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidResult {
    #[error("Unknown prediction label '{0}'")]
    UnknownLabel(String),
    #[error("Confidence {0} is outside 0..=100")]
    ConfidenceOutOfRange(f64),
    #[error("Metric '{name}' must not be negative (got {value})")]
    NegativeCount { name: String, value: f64 },
    #[error("Sentiment polarity {0} is outside -1..=1")]
    PolarityOutOfRange(f64),
    #[error("Metric '{0}' is not a finite number")]
    NonFiniteMetric(String),
    #[error("Random sample is missing its text")]
    MissingSampleText,
}

/// One classification outcome, immutable once built.
///
/// A new classification always yields a new value; the controller swaps the
/// whole thing rather than patching fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    prediction: Prediction,
    confidence: f64,
    metrics: TextMetrics,
    actual_origin: Option<Origin>,
}

impl ClassificationResult {
    pub fn new(
        prediction: Prediction,
        confidence: f64,
        metrics: TextMetrics,
    ) -> Result<Self, InvalidResult> {
        if !confidence.is_finite() || !(0.0..=100.0).contains(&confidence) {
            return Err(InvalidResult::ConfidenceOutOfRange(confidence));
        }
        metrics.validate()?;
        Ok(Self {
            prediction,
            confidence,
            metrics,
            actual_origin: None,
        })
    }

    /// Attach the known origin of a server-chosen sample.
    pub fn with_actual_origin(mut self, origin: Option<Origin>) -> Self {
        self.actual_origin = origin;
        self
    }

    pub fn prediction(&self) -> Prediction {
        self.prediction
    }

    /// Confidence as a percentage in `0..=100`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    pub fn actual_origin(&self) -> Option<Origin> {
        self.actual_origin
    }
}

/// Server-chosen example text together with its classification.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSample {
    pub text: String,
    pub result: ClassificationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!(Prediction::parse("Bot").unwrap(), Prediction::Bot);
        assert_eq!(Prediction::parse(" human ").unwrap(), Prediction::Human);
        assert_eq!(Origin::parse("bot").unwrap(), Origin::Bot);
        assert!(matches!(
            Prediction::parse("robot"),
            Err(InvalidResult::UnknownLabel(_))
        ));
    }

    #[test]
    fn confidence_must_stay_in_percent_range() {
        let metrics = TextMetrics::default();
        assert!(ClassificationResult::new(Prediction::Bot, 0.0, metrics.clone()).is_ok());
        assert!(ClassificationResult::new(Prediction::Bot, 100.0, metrics.clone()).is_ok());
        assert_eq!(
            ClassificationResult::new(Prediction::Bot, 100.5, metrics.clone()),
            Err(InvalidResult::ConfidenceOutOfRange(100.5))
        );
        assert!(ClassificationResult::new(Prediction::Human, f64::NAN, metrics).is_err());
    }

    #[test]
    fn actual_origin_is_optional() {
        let result = ClassificationResult::new(Prediction::Human, 64.2, TextMetrics::default())
            .unwrap()
            .with_actual_origin(Some(Origin::Bot));
        assert_eq!(result.actual_origin(), Some(Origin::Bot));
        assert_eq!(result.prediction().to_string(), "Human");
    }
}
