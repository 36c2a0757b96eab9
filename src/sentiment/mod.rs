//! Sentiment scoring core.
//!
//! - `scorer`: the [`PolarityScorer`] seam and the VADER-backed implementation
//! - `verdict`: compound score → Positive / Neutral / Negative
//! - `words`: independent per-token scoring
//! - `analyzer`: ties the three together into a [`SentimentReport`]
//!
//! ```rust,no_run
//! use sentiscope::sentiment::{SentimentAnalyzer, Verdict};
//!
//! let analyzer = SentimentAnalyzer::vader();
//! let report = analyzer.analyze("I love this!")?;
//! assert_eq!(report.verdict, Verdict::Positive);
//! # Ok::<(), sentiscope::errors::SentimentError>(())
//! ```

pub mod analyzer;
pub mod scorer;
pub mod verdict;
pub mod words;

pub use analyzer::{SentimentAnalyzer, SentimentReport};
pub use scorer::{AnalysisResult, PolarityScorer, VaderScorer};
pub use verdict::{
    classify, classify_with, Verdict, VerdictThresholds, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use words::{score_words, tokenize, WordScore, WordScoreMode};
