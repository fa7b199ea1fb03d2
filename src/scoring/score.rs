use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest value any score can take.
pub const MAX_SCORE: u8 = u8::MAX;

/// A display score in `[0, 255]`.
///
/// Backed by a `u8`, so the range holds by construction. Scores are derived
/// values: every recalculation produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(MAX_SCORE);

    pub fn new(value: u8) -> Self {
        Score(value)
    }

    /// Round a raw formula result and clamp it into range.
    /// NaN maps to zero.
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_nan() {
            return Score::MIN;
        }
        Score(raw.round().clamp(0.0, MAX_SCORE as f64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction of the maximum score, in `[0.0, 1.0]`. Drives progress bars.
    pub fn fraction(self) -> f64 {
        self.0 as f64 / MAX_SCORE as f64
    }

    pub fn percent(self) -> f64 {
        self.fraction() * 100.0
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
