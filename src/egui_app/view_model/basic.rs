use crate::detection::{ClassificationResult, Prediction};

/// Prediction summary plus every raw metric the service returned.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicView {
    pub prediction: Prediction,
    /// Confidence formatted to two decimals, e.g. `"97.31%"`.
    pub confidence_label: String,
    /// Known origin of a random sample, when the service supplied one.
    pub actual_origin: Option<&'static str>,
    /// Whether the known origin agrees with the prediction.
    pub origin_matches: Option<bool>,
    pub metrics: Vec<MetricRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
}

impl BasicView {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let origin = result.actual_origin();
        Self {
            prediction: result.prediction(),
            confidence_label: format!("{:.2}%", result.confidence()),
            actual_origin: origin.map(|origin| origin.label()),
            origin_matches: origin.map(|origin| origin.label() == result.prediction().label()),
            metrics: result
                .metrics()
                .iter()
                .map(|(name, value)| MetricRow {
                    label: name.replace('_', " "),
                    value: format_metric(value),
                })
                .collect(),
        }
    }
}

fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{Origin, TextMetrics};

    #[test]
    fn lists_metrics_sorted_with_readable_labels() {
        let metrics = TextMetrics::from_values([
            ("word_count".to_string(), 6.0),
            ("avg_word_length".to_string(), 5.6667),
            ("hashtag_count".to_string(), 2.0),
        ])
        .unwrap();
        let result = ClassificationResult::new(Prediction::Bot, 97.3149, metrics).unwrap();
        let view = BasicView::from_result(&result);

        assert_eq!(view.confidence_label, "97.31%");
        let labels: Vec<_> = view.metrics.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, ["avg word length", "hashtag count", "word count"]);
        assert_eq!(view.metrics[0].value, "5.67");
        assert_eq!(view.metrics[2].value, "6");
        assert_eq!(view.actual_origin, None);
    }

    #[test]
    fn reports_origin_agreement() {
        let result = ClassificationResult::new(Prediction::Bot, 60.0, TextMetrics::default())
            .unwrap()
            .with_actual_origin(Some(Origin::Human));
        let view = BasicView::from_result(&result);
        assert_eq!(view.origin_matches, Some(false));
    }
}
