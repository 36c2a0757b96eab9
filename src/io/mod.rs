pub mod output;

pub use output::{create_writer, proportion_bar, ReportWriter};

use crate::config::ReportFormat;
use crate::formatting::FormattingConfig;
use crate::sentiment::SentimentReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write `report` to `output_file`, or stdout when `None`.
///
/// Files never receive ANSI colors or emoji-dependent glyphs.
pub fn output_report(
    report: &SentimentReport,
    format: ReportFormat,
    output_file: Option<&Path>,
    formatting: FormattingConfig,
    precision: usize,
) -> Result<()> {
    match output_file {
        Some(path) => {
            let mut buffer = Vec::new();
            create_writer(format, &mut buffer, FormattingConfig::plain(), precision)
                .write_report(report)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                ensure_dir(parent)?;
            }
            let content = String::from_utf8(buffer).context("report is not valid UTF-8")?;
            write_file(path, &content)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            create_writer(format, stdout.lock(), formatting, precision).write_report(report)?;
        }
    }
    Ok(())
}
