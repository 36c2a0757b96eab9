//! Per-word scoring.
//!
//! Each whitespace-delimited token is scored on its own, without sentence
//! context. Tokens are taken literally: `great!` and `Great` are scored as
//! written, so punctuation-attached words may come back as 0.0.

use super::scorer::PolarityScorer;
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compound score for a single token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub compound: f64,
}

/// How repeated tokens are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordScoreMode {
    /// One row per distinct token, first-occurrence order, last value wins.
    #[default]
    Unique,
    /// One row per occurrence, in input order.
    PerOccurrence,
}

/// Split on whitespace with no other normalization.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Score every token of `text` independently.
pub fn score_words<S: PolarityScorer + ?Sized>(
    scorer: &S,
    text: &str,
    mode: WordScoreMode,
) -> Result<Vec<WordScore>> {
    let tokens = tokenize(text);
    tracing::debug!(tokens = tokens.len(), ?mode, "scoring words");

    match mode {
        WordScoreMode::PerOccurrence => tokens
            .into_iter()
            .map(|token| score_token(scorer, token))
            .collect(),
        WordScoreMode::Unique => score_unique(scorer, &tokens),
    }
}

fn score_token<S: PolarityScorer + ?Sized>(scorer: &S, token: &str) -> Result<WordScore> {
    Ok(WordScore {
        word: token.to_string(),
        compound: scorer.compound(token)?,
    })
}

// Every occurrence is scored, so a stateful scorer would still see the last
// occurrence's value win.
fn score_unique<S: PolarityScorer + ?Sized>(scorer: &S, tokens: &[&str]) -> Result<Vec<WordScore>> {
    let mut rows: Vec<WordScore> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for &token in tokens {
        let scored = score_token(scorer, token)?;
        match positions.get(token) {
            Some(&index) => rows[index] = scored,
            None => {
                positions.insert(token, rows.len());
                rows.push(scored);
            }
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::scorer::AnalysisResult;
    use std::cell::Cell;

    /// Scores "good" as +0.5, "bad" as -0.5, everything else 0.
    struct FixedScorer {
        calls: Cell<usize>,
    }

    impl FixedScorer {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl PolarityScorer for FixedScorer {
        fn score(&self, text: &str) -> Result<AnalysisResult> {
            self.calls.set(self.calls.get() + 1);
            let compound = match text {
                "good" => 0.5,
                "bad" => -0.5,
                _ => 0.0,
            };
            Ok(AnalysisResult::new(compound, 0.0, 1.0, 0.0))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("good bad"), vec!["good", "bad"]);
        assert_eq!(tokenize("  good\tbad\nugly  "), vec!["good", "bad", "ugly"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_punctuation_and_case() {
        assert_eq!(tokenize("Great! great"), vec!["Great!", "great"]);
    }

    #[test]
    fn test_each_word_scored_independently() {
        let scorer = FixedScorer::new();
        let words = score_words(&scorer, "good bad", WordScoreMode::PerOccurrence).unwrap();
        assert_eq!(
            words,
            vec![
                WordScore {
                    word: "good".into(),
                    compound: 0.5
                },
                WordScore {
                    word: "bad".into(),
                    compound: -0.5
                },
            ]
        );
    }

    #[test]
    fn test_unique_mode_collapses_duplicates() {
        let scorer = FixedScorer::new();
        let words = score_words(&scorer, "bad good bad", WordScoreMode::Unique).unwrap();
        let names: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(names, vec!["bad", "good"]);
        assert_eq!(scorer.calls.get(), 3);
    }

    #[test]
    fn test_per_occurrence_keeps_duplicates() {
        let scorer = FixedScorer::new();
        let words = score_words(&scorer, "bad bad", WordScoreMode::PerOccurrence).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| w.word == "bad" && w.compound == -0.5));
    }
}
