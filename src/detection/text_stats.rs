//! Text statistics that can be computed without asking the service.
//!
//! These mirror the count features the prediction service reports, so the
//! input panel can show a live preview while the user types. Sentiment and
//! part-of-speech counts need a language model and are never produced here.

use std::sync::LazyLock;

use regex::Regex;

use super::metrics::{MetricKey, TextMetrics};

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("link regex must compile"));

/// Count-based statistics for one piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStats {
    pub char_count: usize,
    pub word_count: usize,
    pub avg_word_length: f64,
    pub exclamation_count: usize,
    pub hashtag_count: usize,
    pub mention_count: usize,
    pub link_count: usize,
}

impl TextStats {
    /// Compute statistics for `text`.
    pub fn from_text(text: &str) -> Self {
        let char_count = text.chars().count();
        let word_count = text.split_whitespace().count();
        Self {
            char_count,
            word_count,
            avg_word_length: char_count as f64 / word_count.max(1) as f64,
            exclamation_count: count_char(text, '!'),
            hashtag_count: count_char(text, '#'),
            mention_count: count_char(text, '@'),
            link_count: LINK_PATTERN.find_iter(text).count(),
        }
    }

    /// Convert into the metric map shape the service uses.
    pub fn to_metrics(&self) -> TextMetrics {
        TextMetrics::from_known([
            (MetricKey::CharCount, self.char_count as f64),
            (MetricKey::WordCount, self.word_count as f64),
            (MetricKey::AvgWordLength, self.avg_word_length),
            (MetricKey::ExclamationCount, self.exclamation_count as f64),
            (MetricKey::HashtagCount, self.hashtag_count as f64),
            (MetricKey::MentionCount, self.mention_count as f64),
            (MetricKey::LinkCount, self.link_count as f64),
        ])
    }
}

fn count_char(text: &str, needle: char) -> usize {
    text.chars().filter(|ch| *ch == needle).count()
}
