use crate::cli::TuiSettings;
use crate::sentiment::SentimentAnalyzer;
use crate::tui::SentimentExplorer;
use anyhow::{Context, Result};

/// Run the interactive UI until the user quits.
pub fn run_interactive(settings: TuiSettings, initial_text: Option<&str>) -> Result<()> {
    let analyzer = SentimentAnalyzer::vader()
        .with_thresholds(settings.thresholds)
        .with_word_mode(settings.word_mode);

    let mut explorer = SentimentExplorer::new(analyzer, settings.precision)
        .context("Failed to initialize terminal")?;
    if let Some(text) = initial_text {
        explorer = explorer.with_input(text);
    }

    let result = explorer.run().context("Terminal UI failed");
    explorer.cleanup().context("Failed to restore terminal")?;
    result
}
