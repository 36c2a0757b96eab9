//! Configuration builders for CLI commands
//!
//! Merges command-line flags over the loaded [`SentiscopeConfig`]; a flag
//! always wins over the file value.

use crate::cli::args::AnalyzeArgs;
use crate::config::{ReportFormat, SentiscopeConfig};
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::sentiment::{VerdictThresholds, WordScoreMode};
use std::path::PathBuf;

/// Fully resolved settings for one `analyze` run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeSettings {
    pub text: String,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub thresholds: VerdictThresholds,
    pub word_mode: WordScoreMode,
    pub precision: usize,
    pub formatting: FormattingConfig,
}

/// Settings for the interactive UI
#[derive(Debug, Clone, PartialEq)]
pub struct TuiSettings {
    pub thresholds: VerdictThresholds,
    pub word_mode: WordScoreMode,
    pub precision: usize,
}

/// Build analyze settings. Fails when the flags produce invalid thresholds.
pub fn build_analyze_settings(
    args: &AnalyzeArgs,
    config: &SentiscopeConfig,
) -> Result<AnalyzeSettings, String> {
    let thresholds = merge_thresholds(
        config.verdict_thresholds(),
        args.positive_threshold,
        args.negative_threshold,
    )?;

    Ok(AnalyzeSettings {
        text: args.joined_text(),
        format: args
            .format
            .map(ReportFormat::from)
            .unwrap_or_else(|| config.default_format()),
        output: args.output.clone(),
        thresholds,
        word_mode: args
            .word_mode
            .map(WordScoreMode::from)
            .unwrap_or_else(|| config.word_mode()),
        precision: args
            .precision
            .map(usize::from)
            .unwrap_or_else(|| config.precision()),
        formatting: create_formatting_config(args.plain),
    })
}

pub fn build_tui_settings(config: &SentiscopeConfig) -> TuiSettings {
    TuiSettings {
        thresholds: config.verdict_thresholds(),
        word_mode: config.word_mode(),
        precision: config.precision(),
    }
}

fn merge_thresholds(
    base: VerdictThresholds,
    positive: Option<f64>,
    negative: Option<f64>,
) -> Result<VerdictThresholds, String> {
    let merged = VerdictThresholds::new(
        positive.unwrap_or(base.positive),
        negative.unwrap_or(base.negative),
    );
    merged.validate()?;
    Ok(merged)
}

pub fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
