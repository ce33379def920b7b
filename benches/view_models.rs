use std::hint::black_box;

use botlens::detection::text_stats::TextStats;
use botlens::detection::{ClassificationResult, Prediction, TextMetrics};
use botlens::egui_app::state::ActiveView;
use botlens::egui_app::view_model::panel_for;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SAMPLE_TEXT: &str =
    "Huge giveaway today!!! Follow @deals and retweet #win #crypto #free https://x.co/a";

fn sample_result() -> ClassificationResult {
    let mut pairs: Vec<(String, f64)> = TextStats::from_text(SAMPLE_TEXT)
        .to_metrics()
        .iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    pairs.extend([
        ("sentiment_polarity".to_string(), 0.42),
        ("pos_noun_count".to_string(), 5.0),
        ("pos_verb_count".to_string(), 3.0),
        ("pos_propn_count".to_string(), 2.0),
    ]);
    let metrics = TextMetrics::from_values(pairs).expect("valid metrics");
    ClassificationResult::new(Prediction::Bot, 93.17, metrics).expect("valid result")
}

fn bench_panels(c: &mut Criterion) {
    let result = sample_result();
    let mut group = c.benchmark_group("panel_for");
    for view in ActiveView::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(view.id()), &view, |b, view| {
            b.iter(|| panel_for(black_box(*view), Some(black_box(&result))))
        });
    }
    group.finish();
}

fn bench_text_stats(c: &mut Criterion) {
    c.bench_function("text_stats", |b| {
        b.iter(|| TextStats::from_text(black_box(SAMPLE_TEXT)))
    });
}

criterion_group!(benches, bench_panels, bench_text_stats);
criterion_main!(benches);
