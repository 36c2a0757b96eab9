use serde::{Deserialize, Serialize};

use crate::sentiment::{VerdictThresholds, WordScoreMode};

/// Root configuration structure for sentiscope
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SentiscopeConfig {
    /// Verdict cut-offs
    #[serde(default)]
    pub thresholds: Option<VerdictThresholds>,

    /// Word table settings
    #[serde(default)]
    pub words: Option<WordsConfig>,

    /// Output settings
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl SentiscopeConfig {
    pub fn verdict_thresholds(&self) -> VerdictThresholds {
        self.thresholds.unwrap_or_default()
    }

    pub fn word_mode(&self) -> WordScoreMode {
        self.words.as_ref().map(|w| w.mode).unwrap_or_default()
    }

    pub fn default_format(&self) -> ReportFormat {
        self.output
            .as_ref()
            .map(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn precision(&self) -> usize {
        self.output
            .as_ref()
            .map(|o| o.precision)
            .unwrap_or_else(default_precision)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct WordsConfig {
    #[serde(default)]
    pub mode: WordScoreMode,
}

/// Report formats available in one-shot mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: ReportFormat,

    /// Decimal places for scores (0..=6)
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: ReportFormat::default(),
            precision: default_precision(),
        }
    }
}

pub fn default_precision() -> usize {
    2
}

pub const MAX_PRECISION: usize = 6;
