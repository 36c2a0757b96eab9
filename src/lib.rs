//! Lexicon-based sentiment analysis with an interactive terminal UI.
//!
//! The core lives in [`sentiment`]: a [`sentiment::PolarityScorer`] produces
//! scores, [`sentiment::classify_with`] maps the compound score to a
//! [`sentiment::Verdict`], and [`sentiment::score_words`] scores each
//! whitespace-separated token. [`tui`] and [`io`] present the resulting
//! [`sentiment::SentimentReport`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod sentiment;
pub mod tui;

pub use crate::errors::{Result, SentimentError};
pub use crate::sentiment::{
    classify, AnalysisResult, PolarityScorer, SentimentAnalyzer, SentimentReport, VaderScorer,
    Verdict,
};
