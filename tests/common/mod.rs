// Shared helpers for sentiscope integration tests
#![allow(dead_code)]

use sentiscope::sentiment::{AnalysisResult, PolarityScorer};
use sentiscope::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Scorer with a fixed word → compound table. Unknown text scores 0.
/// Multi-word text scores the sum of its known words, clamped to [-1, 1].
#[derive(Debug, Default)]
pub struct LexiconStub {
    words: HashMap<String, f64>,
}

impl LexiconStub {
    pub fn new(entries: &[(&str, f64)]) -> Self {
        Self {
            words: entries
                .iter()
                .map(|(word, score)| (word.to_string(), *score))
                .collect(),
        }
    }
}

impl PolarityScorer for LexiconStub {
    fn score(&self, text: &str) -> Result<AnalysisResult> {
        let compound: f64 = text
            .split_whitespace()
            .filter_map(|w| self.words.get(w))
            .sum::<f64>()
            .clamp(-1.0, 1.0);
        let (pos, neg) = if compound > 0.0 {
            (compound, 0.0)
        } else {
            (0.0, -compound)
        };
        Ok(AnalysisResult::new(compound, pos / 2.0, 1.0 - (pos + neg) / 2.0, neg / 2.0))
    }

    fn name(&self) -> &str {
        "lexicon-stub"
    }
}

// Helper to create temporary config files
pub fn create_config_file(content: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join(".sentiscope.toml");
    std::fs::write(&file_path, content).expect("Failed to write config file");
    (temp_dir, file_path)
}
