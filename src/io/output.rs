//! Report writers for one-shot mode.

use crate::config::ReportFormat;
use crate::formatting::{formatter_for, verdict_label, FormattingConfig, OutputFormatter};
use crate::observability::{set_phase, AnalysisPhase};
use crate::sentiment::{SentimentReport, Verdict};
use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

/// Width in characters of a full proportion bar.
const BAR_WIDTH: usize = 30;

pub trait ReportWriter {
    fn write_report(&mut self, report: &SentimentReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: ReportFormat,
    writer: W,
    formatting: FormattingConfig,
    precision: usize,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        ReportFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting, precision)),
        ReportFormat::Json => Box::new(JsonWriter::new(writer)),
        ReportFormat::Markdown => Box::new(MarkdownWriter::new(writer, precision)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let _phase = set_phase(AnalysisPhase::OutputGeneration);
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    precision: usize,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, precision: usize) -> Self {
        Self { writer, precision }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let _phase = set_phase(AnalysisPhase::OutputGeneration);
        self.write_header(report)?;
        self.write_scores(report)?;
        self.write_words(report)?;
        self.write_distribution(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Sentiment Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Scorer: {}", report.scorer)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Overall Sentiment:** {} {} (`{}`)",
            report.verdict.label(),
            report.verdict.emoji(),
            report.verdict.hex_color()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        for (metric, value) in report.metric_rows() {
            writeln!(
                self.writer,
                "| {metric} | {value:.prec$} |",
                prec = self.precision
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_words(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Word-level Sentiment Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Word | Sentiment Score |")?;
        writeln!(self.writer, "|------|-----------------|")?;
        for word in &report.words {
            writeln!(
                self.writer,
                "| {} | {:.prec$} |",
                escape_markdown_cell(&word.word),
                word.compound,
                prec = self.precision
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Sentiment Distribution")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Sentiment | Proportion |")?;
        writeln!(self.writer, "|-----------|------------|")?;
        for (label, value) in report.scores.proportions() {
            writeln!(
                self.writer,
                "| {label} | {value:.prec$} |",
                prec = self.precision
            )?;
        }
        Ok(())
    }
}

fn escape_markdown_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    ascii_only: bool,
    precision: usize,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig, precision: usize) -> Self {
        Self {
            writer,
            formatter: formatter_for(formatting),
            ascii_only: !formatting.emoji.should_use_emoji(),
            precision,
        }
    }

    fn new_table(&self, header: [&str; 2]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.ascii_only {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header.to_vec());
        table
    }

    fn value_cell(&self, value: f64) -> Cell {
        Cell::new(format!("{value:.prec$}", prec = self.precision))
            .set_alignment(CellAlignment::Center)
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let _phase = set_phase(AnalysisPhase::OutputGeneration);
        self.write_verdict(report)?;
        self.write_scores(report)?;
        self.write_words(report)?;
        self.write_distribution(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_verdict(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let label = verdict_label(self.formatter.as_ref(), report.verdict);
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.bold("Overall Sentiment:"),
            self.formatter.verdict(report.verdict, &label)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scores(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        let mut table = self.new_table(["Metric", "Value"]);
        for (metric, value) in report.metric_rows() {
            table.add_row(vec![Cell::new(metric), self.value_cell(value)]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_words(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("Word-level Sentiment Analysis")
        )?;
        let mut table = self.new_table(["Word", "Sentiment Score"]);
        for word in &report.words {
            table.add_row(vec![Cell::new(&word.word), self.value_cell(word.compound)]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, report: &SentimentReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("Sentiment Distribution")
        )?;
        let (full, empty) = if self.ascii_only { ('#', '.') } else { ('█', '░') };

        for (verdict, (label, value)) in Verdict::all().into_iter().zip(report.scores.proportions()) {
            let bar = proportion_bar(value, BAR_WIDTH, full, empty);
            writeln!(
                self.writer,
                "  {:<9} {} {:.prec$}",
                label,
                self.formatter.verdict(verdict, &bar),
                value,
                prec = self.precision
            )?;
        }
        Ok(())
    }
}

/// Fixed-width bar for a proportion in [0, 1]; out-of-range values are clamped.
pub fn proportion_bar(value: f64, width: usize, full: char, empty: char) -> String {
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    let filled = (clamped * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * full.len_utf8());
    bar.extend(std::iter::repeat_n(full, filled));
    bar.extend(std::iter::repeat_n(empty, width - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{AnalysisResult, VerdictThresholds, WordScore, WordScoreMode};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn sample_report() -> SentimentReport {
        SentimentReport {
            text: "good | bad".to_string(),
            scores: AnalysisResult::new(0.1, 0.4, 0.35, 0.25),
            verdict: Verdict::Positive,
            words: vec![
                WordScore {
                    word: "good".into(),
                    compound: 0.4404,
                },
                WordScore {
                    word: "|".into(),
                    compound: 0.0,
                },
                WordScore {
                    word: "bad".into(),
                    compound: -0.5423,
                },
            ],
            word_mode: WordScoreMode::Unique,
            thresholds: VerdictThresholds::default(),
            scorer: "vader".into(),
            generated_at: Utc::now(),
        }
    }

    fn render(format: ReportFormat) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, &mut buffer, FormattingConfig::plain(), 2);
            writer.write_report(&sample_report()).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_proportion_bar_widths() {
        assert_eq!(proportion_bar(0.0, 4, '#', '.'), "....");
        assert_eq!(proportion_bar(0.5, 4, '#', '.'), "##..");
        assert_eq!(proportion_bar(1.0, 4, '#', '.'), "####");
        assert_eq!(proportion_bar(1.7, 4, '#', '.'), "####");
        assert_eq!(proportion_bar(f64::NAN, 4, '#', '.'), "....");
    }

    #[test]
    fn test_terminal_output_contains_all_sections() {
        let output = render(ReportFormat::Terminal);
        assert!(output.contains("Overall Sentiment: Positive"));
        assert!(output.contains("Compound"));
        assert!(output.contains("0.10"));
        assert!(output.contains("Word-level Sentiment Analysis"));
        assert!(output.contains("-0.54"));
        assert!(output.contains("Sentiment Distribution"));
        assert!(output.contains("Negative"));
        assert!(!output.contains('\u{1b}'), "plain output must not contain ANSI codes");
    }

    #[test]
    fn test_json_output_round_trips() {
        let output = render(ReportFormat::Json);
        let parsed: SentimentReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.verdict, Verdict::Positive);
        assert_eq!(parsed.words.len(), 3);
        assert_eq!(parsed.scores.compound, 0.1);
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let output = render(ReportFormat::Markdown);
        assert!(output.starts_with("# Sentiment Analysis Report"));
        assert!(output.contains("| \\| | 0.00 |"));
        assert!(output.contains("| good | 0.44 |"));
        assert!(output.contains("| Negative | 0.25 |"));
    }

    #[test]
    fn test_markdown_header_shows_verdict_color() {
        let output = render(ReportFormat::Markdown);
        let header = output
            .lines()
            .find(|line| line.starts_with("**Overall Sentiment:**"))
            .unwrap();
        assert!(header.starts_with("**Overall Sentiment:** Positive"));
        assert!(header.ends_with("(`#2ecc71`)"));
    }
}
