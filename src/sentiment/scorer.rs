//! Polarity scoring backed by the VADER lexicon.
//!
//! The lexicon and its heuristics (negation, intensifiers, punctuation
//! emphasis) live in the `vader_sentiment` crate. This module only adapts its
//! keyed output into [`AnalysisResult`] and turns scorer failures into
//! [`SentimentError::Scorer`].

use crate::errors::{Result, SentimentError};
use crate::observability::{enter_recoverable_scope, set_phase, AnalysisPhase};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Polarity scores for one piece of text.
///
/// `positive + neutral + negative` is approximately 1.0 for non-empty text,
/// as produced by the scorer. The sum is not re-normalized here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Normalized overall polarity in [-1, 1]
    pub compound: f64,
    /// Proportion of positive sentiment in [0, 1]
    pub positive: f64,
    /// Proportion of neutral sentiment in [0, 1]
    pub neutral: f64,
    /// Proportion of negative sentiment in [0, 1]
    pub negative: f64,
}

impl AnalysisResult {
    pub fn new(compound: f64, positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            compound,
            positive,
            neutral,
            negative,
        }
    }

    /// Sum of the three proportions.
    pub fn proportion_total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// Proportions in display order: positive, neutral, negative.
    pub fn proportions(&self) -> [(&'static str, f64); 3] {
        [
            ("Positive", self.positive),
            ("Neutral", self.neutral),
            ("Negative", self.negative),
        ]
    }

    /// Build a result from VADER's keyed output (`neg`, `neu`, `pos`, `compound`).
    pub fn from_polarity_map(scores: &HashMap<&str, f64>) -> Result<Self> {
        let get = |key: &str| {
            scores
                .get(key)
                .copied()
                .ok_or_else(|| SentimentError::scorer(format!("missing '{key}' score")))
        };

        Ok(Self {
            compound: get("compound")?,
            positive: get("pos")?,
            neutral: get("neu")?,
            negative: get("neg")?,
        })
    }
}

/// A function that scores text for sentiment polarity.
pub trait PolarityScorer {
    /// Score `text` as a whole.
    fn score(&self, text: &str) -> Result<AnalysisResult>;

    /// Compound score only, used for per-word scoring.
    fn compound(&self, text: &str) -> Result<f64> {
        self.score(text).map(|result| result.compound)
    }

    /// Short name shown in reports.
    fn name(&self) -> &str;
}

/// VADER lexicon and rule-based scorer.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl PolarityScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<AnalysisResult> {
        let scores = guarded_score(|| {
            let scores = self.analyzer.polarity_scores(text);
            AnalysisResult::from_polarity_map(&scores)
        })?;
        Ok(without_punctuation_bias(scores))
    }

    fn name(&self) -> &str {
        "vader"
    }
}

/// Run `score` in the scoring phase, turning a panic into
/// [`SentimentError::Scorer`].
pub(crate) fn guarded_score<F>(score: F) -> Result<AnalysisResult>
where
    F: FnOnce() -> Result<AnalysisResult>,
{
    let _phase = set_phase(AnalysisPhase::Scoring);
    let _recoverable = enter_recoverable_scope();

    match panic::catch_unwind(AssertUnwindSafe(score)) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(%message, "VADER scorer panicked");
            Err(SentimentError::scorer(format!(
                "sentiment lexicon failed: {message}"
            )))
        }
    }
}

/// Text without any lexicon hit has a zero valence sum and must score 0.
/// `vader_sentiment` still subtracts the `!`/`?` emphasis in that case, so
/// `"table!"` would come back negative.
fn without_punctuation_bias(scores: AnalysisResult) -> AnalysisResult {
    if scores.positive == 0.0 && scores.negative == 0.0 {
        AnalysisResult {
            compound: 0.0,
            ..scores
        }
    } else {
        scores
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_polarity_map_maps_vader_keys() {
        let scores: HashMap<&str, f64> = [
            ("neg", 0.1),
            ("neu", 0.6),
            ("pos", 0.3),
            ("compound", 0.42),
        ]
        .into_iter()
        .collect();

        let result = AnalysisResult::from_polarity_map(&scores).unwrap();
        assert_eq!(result, AnalysisResult::new(0.42, 0.3, 0.6, 0.1));
    }

    #[test]
    fn test_from_polarity_map_reports_missing_key() {
        let scores: HashMap<&str, f64> = [("neg", 0.0), ("neu", 1.0), ("pos", 0.0)]
            .into_iter()
            .collect();

        let err = AnalysisResult::from_polarity_map(&scores).unwrap_err();
        assert!(err.to_string().contains("compound"));
    }

    #[test]
    fn test_punctuation_alone_scores_zero() {
        let scorer = VaderScorer::new();
        for text in ["This is a table!", "The meeting is at noon!!", "!!!", "table?"] {
            let result = scorer.score(text).unwrap();
            assert_eq!(result.compound, 0.0, "{text}");
            assert_eq!(result.positive, 0.0, "{text}");
            assert_eq!(result.negative, 0.0, "{text}");
        }
    }

    #[test]
    fn test_punctuation_still_amplifies_sentiment() {
        let scorer = VaderScorer::new();
        let plain = scorer.compound("good").unwrap();
        let excited = scorer.compound("good!!").unwrap();
        assert!(excited > plain, "{excited} <= {plain}");
    }

    #[test]
    fn test_punctuation_bias_only_cleared_without_polarity() {
        let neutral = without_punctuation_bias(AnalysisResult::new(-0.0752, 0.0, 1.0, 0.0));
        assert_eq!(neutral, AnalysisResult::new(0.0, 0.0, 1.0, 0.0));

        let negative = AnalysisResult::new(-0.6, 0.0, 0.4, 0.6);
        assert_eq!(without_punctuation_bias(negative), negative);
    }

    #[test]
    fn test_guarded_score_turns_panic_into_scorer_error() {
        let err = guarded_score(|| panic!("lexicon exploded")).unwrap_err();
        assert!(matches!(err, SentimentError::Scorer(_)));
        assert!(err.to_string().contains("lexicon exploded"));

        // The recoverable scope and phase are restored after unwinding
        let context = crate::observability::get_current_context();
        assert!(!context.recoverable);
        assert_ne!(context.phase, Some(AnalysisPhase::Scoring));
    }

    #[test]
    fn test_guarded_score_passes_errors_through() {
        let err = guarded_score(|| Err(SentimentError::scorer("missing compound"))).unwrap_err();
        assert_eq!(err.to_string(), "Scoring failed: missing compound");
    }

    #[test]
    fn test_proportion_total() {
        let result = AnalysisResult::new(0.0, 0.25, 0.5, 0.25);
        assert!((result.proportion_total() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vader_scores_positive_text() {
        let scorer = VaderScorer::new();
        let result = scorer.score("I love this!").unwrap();
        assert!(result.compound > 0.05, "compound was {}", result.compound);
        assert!(result.positive > result.negative);
    }

    #[test]
    fn test_vader_scores_negative_text() {
        let scorer = VaderScorer::new();
        let result = scorer.score("This is terrible and I hate it.").unwrap();
        assert!(result.compound < -0.05, "compound was {}", result.compound);
    }

    #[test]
    fn test_vader_compound_for_single_word() {
        let scorer = VaderScorer::new();
        assert!(scorer.compound("good").unwrap() > 0.0);
        assert!(scorer.compound("bad").unwrap() < 0.0);
        assert_eq!(scorer.compound("table").unwrap(), 0.0);
    }

    #[test]
    fn test_panic_message_extracts_str_and_string() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
    }
}
