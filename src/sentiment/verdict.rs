//! Three-way verdict derived from the compound score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound score at or above which text is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Overall sentiment label for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Positive,
    Neutral,
    Negative,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Neutral => "😐",
            Self::Negative => "😠",
        }
    }

    /// Display color as an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Positive => (0x2e, 0xcc, 0x71),
            Self::Neutral => (0x34, 0x98, 0xdb),
            Self::Negative => (0xe7, 0x4c, 0x3c),
        }
    }

    /// Display color as a `#rrggbb` string.
    pub fn hex_color(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn all() -> [Verdict; 3] {
        [Self::Positive, Self::Neutral, Self::Negative]
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compound-score cut-offs used by [`classify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    #[serde(default = "default_positive")]
    pub positive: f64,
    #[serde(default = "default_negative")]
    pub negative: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            positive: default_positive(),
            negative: default_negative(),
        }
    }
}

fn default_positive() -> f64 {
    POSITIVE_THRESHOLD
}

fn default_negative() -> f64 {
    NEGATIVE_THRESHOLD
}

impl VerdictThresholds {
    pub fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    /// Check that both cut-offs are finite, inside [-1, 1], and ordered.
    pub fn validate(&self) -> Result<(), String> {
        if !self.positive.is_finite() || !self.negative.is_finite() {
            return Err("thresholds must be finite numbers".to_string());
        }
        if !(-1.0..=1.0).contains(&self.positive) || !(-1.0..=1.0).contains(&self.negative) {
            return Err(format!(
                "thresholds must lie within [-1, 1] (positive = {}, negative = {})",
                self.positive, self.negative
            ));
        }
        if self.negative >= self.positive {
            return Err(format!(
                "negative threshold ({}) must be below positive threshold ({})",
                self.negative, self.positive
            ));
        }
        Ok(())
    }
}

/// Classify a compound score with the standard ±0.05 cut-offs.
pub fn classify(compound: f64) -> Verdict {
    classify_with(compound, &VerdictThresholds::default())
}

/// Classify a compound score with custom cut-offs. NaN is Neutral.
pub fn classify_with(compound: f64, thresholds: &VerdictThresholds) -> Verdict {
    if compound >= thresholds.positive {
        Verdict::Positive
    } else if compound <= thresholds.negative {
        Verdict::Negative
    } else {
        Verdict::Neutral
    }
}
