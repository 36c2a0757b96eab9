//! One analysis run: score, classify, and score words.

use super::scorer::{AnalysisResult, PolarityScorer, VaderScorer};
use super::verdict::{classify_with, Verdict, VerdictThresholds};
use super::words::{score_words, WordScore, WordScoreMode};
use crate::errors::{Result, SentimentError};
use crate::observability::increment_completed;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a presentation needs to render one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// Input after trimming
    pub text: String,
    pub scores: AnalysisResult,
    pub verdict: Verdict,
    pub words: Vec<WordScore>,
    pub word_mode: WordScoreMode,
    pub thresholds: VerdictThresholds,
    pub scorer: String,
    pub generated_at: DateTime<Utc>,
}

impl SentimentReport {
    /// Metric rows in display order: Compound, Positive, Neutral, Negative.
    pub fn metric_rows(&self) -> [(&'static str, f64); 4] {
        [
            ("Compound", self.scores.compound),
            ("Positive", self.scores.positive),
            ("Neutral", self.scores.neutral),
            ("Negative", self.scores.negative),
        ]
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Runs the scorer, verdict mapping and word scoring for a piece of text.
#[derive(Debug)]
pub struct SentimentAnalyzer<S: PolarityScorer = VaderScorer> {
    scorer: S,
    thresholds: VerdictThresholds,
    word_mode: WordScoreMode,
}

impl SentimentAnalyzer<VaderScorer> {
    /// Analyzer backed by the VADER lexicon with default settings.
    pub fn vader() -> Self {
        Self::new(VaderScorer::new())
    }
}

impl<S: PolarityScorer> SentimentAnalyzer<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            thresholds: VerdictThresholds::default(),
            word_mode: WordScoreMode::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: VerdictThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_word_mode(mut self, mode: WordScoreMode) -> Self {
        self.word_mode = mode;
        self
    }

    pub fn thresholds(&self) -> &VerdictThresholds {
        &self.thresholds
    }

    pub fn word_mode(&self) -> WordScoreMode {
        self.word_mode
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Analyze `text`. Empty or whitespace-only input is rejected before the
    /// scorer is called.
    pub fn analyze(&self, text: &str) -> Result<SentimentReport> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SentimentError::EmptyInput);
        }

        let span = tracing::info_span!("analyze", chars = text.chars().count());
        let _enter = span.enter();

        let scores = self.scorer.score(text)?;
        tracing::debug!(
            scorer = self.scorer.name(),
            proportion_total = scores.proportion_total(),
            "scored text"
        );
        let verdict = classify_with(scores.compound, &self.thresholds);
        let words = score_words(&self.scorer, text, self.word_mode)?;

        increment_completed();
        tracing::info!(
            compound = scores.compound,
            verdict = %verdict,
            words = words.len(),
            "analysis complete"
        );

        Ok(SentimentReport {
            text: text.to_string(),
            scores,
            verdict,
            words,
            word_mode: self.word_mode,
            thresholds: self.thresholds,
            scorer: self.scorer.name().to_string(),
            generated_at: Utc::now(),
        })
    }
}
