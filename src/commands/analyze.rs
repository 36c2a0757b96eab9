use crate::cli::AnalyzeSettings;
use crate::io;
use crate::sentiment::{SentimentAnalyzer, SentimentReport};
use anyhow::Result;

/// Score `settings.text` and write the report in the requested format.
pub fn handle_analyze(settings: AnalyzeSettings) -> Result<()> {
    let report = run_analysis(&settings)?;
    io::output_report(
        &report,
        settings.format,
        settings.output.as_deref(),
        settings.formatting,
        settings.precision,
    )
}

pub fn run_analysis(settings: &AnalyzeSettings) -> Result<SentimentReport> {
    let analyzer = SentimentAnalyzer::vader()
        .with_thresholds(settings.thresholds)
        .with_word_mode(settings.word_mode);
    log::debug!(
        "Analyzing {} chars with {:?} word mode",
        settings.text.len(),
        settings.word_mode
    );
    Ok(analyzer.analyze(&settings.text)?)
}
