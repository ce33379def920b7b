use super::NormalizedFeature;
use crate::detection::normalize::{self, presence, ratio_floor_one};
use crate::detection::{ClassificationResult, MetricKey, TextMetrics};

/// One radar axis: the current text against typical human and bot values.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarAxis {
    pub current: NormalizedFeature,
    pub human: f64,
    pub bot: f64,
}

/// Ten equal-width sentiment ranges spanning `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentimentBucket(usize);

impl SentimentBucket {
    pub const COUNT: usize = 10;

    const LABELS: [&'static str; Self::COUNT] = [
        "-1.0 to -0.8",
        "-0.8 to -0.6",
        "-0.6 to -0.4",
        "-0.4 to -0.2",
        "-0.2 to 0",
        "0 to 0.2",
        "0.2 to 0.4",
        "0.4 to 0.6",
        "0.6 to 0.8",
        "0.8 to 1.0",
    ];

    /// Bucket a polarity. A polarity of exactly 1.0 falls in the last range.
    pub fn for_polarity(polarity: f64) -> Self {
        let clamped = if polarity.is_nan() {
            0.0
        } else {
            polarity.clamp(-1.0, 1.0)
        };
        let index = ((clamped + 1.0) * 5.0).floor() as usize;
        Self(index.min(Self::COUNT - 1))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.0]
    }
}

/// Reference share of texts per sentiment range, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentimentReference {
    pub label: &'static str,
    pub human: f64,
    pub bot: f64,
}

const SENTIMENT_REFERENCE: [(f64, f64); SentimentBucket::COUNT] = [
    (5.0, 15.0),
    (8.0, 20.0),
    (10.0, 30.0),
    (12.0, 25.0),
    (20.0, 40.0),
    (30.0, 35.0),
    (25.0, 15.0),
    (15.0, 10.0),
    (10.0, 5.0),
    (5.0, 2.0),
];

/// Part-of-speech share of the current text beside the reference shares.
#[derive(Clone, Debug, PartialEq)]
pub struct PosShare {
    pub name: &'static str,
    pub human: f64,
    pub bot: f64,
    pub current: f64,
}

/// (label, wire tag, human %, bot %)
const POS_REFERENCE: [(&str, &str, f64, f64); 6] = [
    ("Nouns", "noun", 35.0, 40.0),
    ("Verbs", "verb", 25.0, 20.0),
    ("Adjectives", "adj", 15.0, 10.0),
    ("Adverbs", "adv", 10.0, 8.0),
    ("Pronouns", "pron", 12.0, 5.0),
    ("Proper Nouns", "propn", 8.0, 17.0),
];

/// Shown when the service did not tag parts of speech.
const POS_SAMPLE: [(&str, f64, f64, f64); 6] = [
    ("Nouns", 35.0, 40.0, 38.0),
    ("Verbs", 25.0, 20.0, 22.0),
    ("Adjectives", 15.0, 10.0, 12.0),
    ("Adverbs", 10.0, 8.0, 9.0),
    ("Pronouns", 12.0, 5.0, 8.0),
    ("Others", 3.0, 17.0, 11.0),
];

const POS_NOUN_KEY: &str = "pos_noun_count";

/// "Bot vs Human Analysis" tab content.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonView {
    pub axes: Vec<RadarAxis>,
    pub sentiment_bucket: SentimentBucket,
    pub sentiment_reference: Vec<SentimentReference>,
    pub pos_shares: Vec<PosShare>,
    /// `false` when [`Self::pos_shares`] is the static sample.
    pub pos_from_metrics: bool,
}

impl ComparisonView {
    pub fn from_result(result: &ClassificationResult) -> Self {
        let metrics = result.metrics();
        let (pos_shares, pos_from_metrics) = pos_shares(metrics);
        Self {
            axes: radar_axes(metrics),
            sentiment_bucket: SentimentBucket::for_polarity(
                metrics.value_or_zero(MetricKey::SentimentPolarity),
            ),
            sentiment_reference: SENTIMENT_REFERENCE
                .iter()
                .zip(SentimentBucket::LABELS)
                .map(|(&(human, bot), label)| SentimentReference { label, human, bot })
                .collect(),
            pos_shares,
            pos_from_metrics,
        }
    }
}

fn radar_axes(metrics: &TextMetrics) -> Vec<RadarAxis> {
    let has = |key| metrics.value_or_zero(key) > 0.0;
    let hashtags = metrics.value_or_zero(MetricKey::HashtagCount);
    let hashtag_density = if hashtags > 0.0 {
        ratio_floor_one(hashtags, metrics.value_or_zero(MetricKey::WordCount))
    } else {
        0.0
    };
    let avg_word_length = metrics
        .get(MetricKey::AvgWordLength)
        .filter(|value| *value != 0.0)
        .unwrap_or(normalize::DEFAULT_AVG_WORD_LENGTH);
    let axis = |name, current, human, bot| RadarAxis {
        current: NormalizedFeature::new(name, current),
        human,
        bot,
    };
    vec![
        axis("Link Usage", presence(has(MetricKey::LinkCount)), 0.3, 0.8),
        axis(
            "Hashtag Usage",
            normalize::HASHTAG_DENSITY.apply(hashtag_density),
            0.4,
            0.7,
        ),
        axis(
            "Exclamation Use",
            presence(has(MetricKey::ExclamationCount)),
            0.5,
            0.8,
        ),
        axis(
            "Sentiment Strength",
            normalize::SENTIMENT_UNIT
                .apply(metrics.value_or_zero(MetricKey::SentimentPolarity).abs()),
            0.7,
            0.2,
        ),
        axis(
            "Word Complexity",
            normalize::WORD_COMPLEXITY.apply(avg_word_length),
            0.6,
            0.3,
        ),
        axis("Mention Usage", presence(has(MetricKey::MentionCount)), 0.5, 0.7),
    ]
}

fn pos_shares(metrics: &TextMetrics) -> (Vec<PosShare>, bool) {
    if metrics.get_named(POS_NOUN_KEY).is_none() {
        let sample = POS_SAMPLE
            .iter()
            .map(|&(name, human, bot, current)| PosShare {
                name,
                human,
                bot,
                current,
            })
            .collect();
        return (sample, false);
    }
    let count = |tag: &str| {
        metrics
            .pos_counts()
            .find(|(name, _)| *name == tag)
            .map_or(0.0, |(_, value)| value)
    };
    let total: f64 = POS_REFERENCE.iter().map(|&(_, tag, _, _)| count(tag)).sum();
    let shares = POS_REFERENCE
        .iter()
        .map(|&(name, tag, human, bot)| PosShare {
            name,
            human,
            bot,
            current: if total > 0.0 {
                count(tag) / total * 100.0
            } else {
                0.0
            },
        })
        .collect();
    (shares, true)
}
