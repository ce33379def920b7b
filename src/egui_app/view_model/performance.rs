//! Illustrative model-quality figures. Static; never derived from the held result.

/// One month of reported model quality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformancePoint {
    pub month: &'static str,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
}

const HISTORY: [PerformancePoint; 6] = [
    point("2025-01", 0.78, 0.75, 0.77),
    point("2025-02", 0.82, 0.79, 0.80),
    point("2025-03", 0.86, 0.84, 0.83),
    point("2025-04", 0.89, 0.87, 0.88),
    point("2025-05", 0.91, 0.90, 0.89),
    point("2025-06", 0.93, 0.92, 0.91),
];

const fn point(month: &'static str, accuracy: f64, precision: f64, recall: f64) -> PerformancePoint {
    PerformancePoint {
        month,
        accuracy,
        precision,
        recall,
    }
}

/// Binary confusion matrix with "Bot" as the positive class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub true_positive: u32,
    pub false_negative: u32,
    pub false_positive: u32,
    pub true_negative: u32,
}

impl ConfusionMatrix {
    pub const REFERENCE: ConfusionMatrix = ConfusionMatrix {
        true_positive: 845,
        false_negative: 80,
        false_positive: 95,
        true_negative: 780,
    };

    pub fn total(&self) -> u32 {
        self.true_positive + self.false_negative + self.false_positive + self.true_negative
    }

    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn recall(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> Option<f64> {
        let precision = self.precision()?;
        let recall = self.recall()?;
        let sum = precision + recall;
        (sum > 0.0).then(|| 2.0 * precision * recall / sum)
    }

    /// Cells with their share of all predictions, for the pie chart.
    pub fn slices(&self) -> [MatrixSlice; 4] {
        let total = self.total();
        let slice = |name, count| MatrixSlice {
            name,
            count,
            share: ratio(count, total),
        };
        [
            slice("True Positive", self.true_positive),
            slice("False Negative", self.false_negative),
            slice("False Positive", self.false_positive),
            slice("True Negative", self.true_negative),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixSlice {
    pub name: &'static str,
    pub count: u32,
    /// `None` when the matrix is empty.
    pub share: Option<f64>,
}

fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64)
}

/// Format an optional rate as a percentage, or "undefined".
pub fn rate_label(rate: Option<f64>) -> String {
    rate.map_or_else(|| "undefined".to_string(), super::percent_label)
}

/// "Model Performance" tab content.
#[derive(Clone, Debug, PartialEq)]
pub struct PerformanceView {
    pub history: Vec<PerformancePoint>,
    pub matrix: ConfusionMatrix,
}

impl PerformanceView {
    pub fn reference() -> Self {
        Self {
            history: HISTORY.to_vec(),
            matrix: ConfusionMatrix::REFERENCE,
        }
    }

    /// Summary rows shown beneath the confusion matrix.
    pub fn summary(&self) -> [(&'static str, String); 4] {
        [
            ("Accuracy", rate_label(self.matrix.accuracy())),
            ("Precision", rate_label(self.matrix.precision())),
            ("Recall", rate_label(self.matrix.recall())),
            ("F1 Score", rate_label(self.matrix.f1())),
        ]
    }
}
