//! Linear, saturating rescaling of raw text metrics.
//!
//! Every panel score goes through [`normalize`]. Inputs outside the declared
//! input range saturate at the nearest bound; they never extrapolate. The
//! fixed policies below encode which raw ranges matter for telling bot text
//! from human text and must stay stable so charts remain comparable.

/// Rescale `value` from `[min_input, max_input]` into `[min_output, max_output]`.
///
/// `value` is clamped to the input range first, and NaN saturates to
/// `min_input`. Calling this with `min_input == max_input` is a bug in the
/// caller.
pub fn normalize(
    value: f64,
    min_input: f64,
    max_input: f64,
    min_output: f64,
    max_output: f64,
) -> f64 {
    debug_assert!(
        max_input != min_input,
        "normalize called with an empty input range"
    );
    let clamped = value.max(min_input).min(max_input);
    min_output + (clamped - min_input) * (max_output - min_output) / (max_input - min_input)
}

/// A fixed input range mapped onto a fixed output range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizationPolicy {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl NormalizationPolicy {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, value: f64) -> f64 {
        normalize(value, self.input.0, self.input.1, self.output.0, self.output.1)
    }
}

/// Hashtag count importance.
pub const HASHTAG_COUNT: NormalizationPolicy = NormalizationPolicy::new((0.0, 5.0), (0.4, 0.85));
/// Words-per-character ratio importance.
pub const WORD_CHAR_RATIO: NormalizationPolicy =
    NormalizationPolicy::new((0.1, 0.25), (0.3, 0.65));
/// Link count importance.
pub const LINK_COUNT: NormalizationPolicy = NormalizationPolicy::new((0.0, 3.0), (0.5, 0.9));
/// Absolute sentiment polarity importance.
pub const SENTIMENT_STRENGTH: NormalizationPolicy =
    NormalizationPolicy::new((0.0, 1.0), (0.2, 0.6));
/// Exclamation count importance.
pub const EXCLAMATION_COUNT: NormalizationPolicy =
    NormalizationPolicy::new((0.0, 4.0), (0.3, 0.7));

/// Presence flag onto the unit range.
pub const PRESENCE: NormalizationPolicy = NormalizationPolicy::new((0.0, 1.0), (0.0, 1.0));
/// Hashtags per word onto the unit range.
pub const HASHTAG_DENSITY: NormalizationPolicy = NormalizationPolicy::new((0.0, 0.2), (0.0, 1.0));
/// Absolute sentiment polarity onto the unit range.
pub const SENTIMENT_UNIT: NormalizationPolicy = NormalizationPolicy::new((0.0, 1.0), (0.0, 1.0));
/// Average word length onto the unit range.
pub const WORD_COMPLEXITY: NormalizationPolicy = NormalizationPolicy::new((3.0, 7.0), (0.0, 1.0));

/// Average word length assumed when the service omits it.
pub const DEFAULT_AVG_WORD_LENGTH: f64 = 4.5;

/// Map a boolean onto `0.0` / `1.0` through [`PRESENCE`].
pub fn presence(flag: bool) -> f64 {
    PRESENCE.apply(if flag { 1.0 } else { 0.0 })
}

/// Divide by `denominator`, treating anything below one as one.
pub fn ratio_floor_one(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(1.0)
}
