//! Command-line argument definitions.

use crate::config::ReportFormat;
use crate::sentiment::WordScoreMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentiscope")]
#[command(about = "Lexicon-based sentiment analyzer with an interactive terminal UI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (skips .sentiscope.toml discovery)
    #[arg(short = 'c', long = "config", global = true, env = "SENTISCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Defaults to the interactive UI
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text and print a report
    Analyze(AnalyzeArgs),

    /// Open the interactive terminal UI
    Tui {
        /// Text to pre-fill the input box with
        #[arg(long)]
        text: Option<String>,
    },

    /// Write a default .sentiscope.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze; multiple arguments are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How repeated words appear in the word table
    #[arg(long = "word-mode", value_enum)]
    pub word_mode: Option<WordModeArg>,

    /// Compound score at or above which text is Positive
    #[arg(long = "positive-threshold", allow_negative_numbers = true)]
    pub positive_threshold: Option<f64>,

    /// Compound score at or below which text is Negative
    #[arg(long = "negative-threshold", allow_negative_numbers = true)]
    pub negative_threshold: Option<f64>,

    /// Decimal places for scores
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub precision: Option<u8>,

    /// Disable colors and emoji
    #[arg(long)]
    pub plain: bool,
}

impl AnalyzeArgs {
    /// The text arguments as one input string.
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Markdown => ReportFormat::Markdown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WordModeArg {
    /// One row per distinct word
    Unique,
    /// One row per token, duplicates included
    PerOccurrence,
}

impl From<WordModeArg> for WordScoreMode {
    fn from(mode: WordModeArg) -> Self {
        match mode {
            WordModeArg::Unique => WordScoreMode::Unique,
            WordModeArg::PerOccurrence => WordScoreMode::PerOccurrence,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["sentiscope"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from([
            "sentiscope",
            "analyze",
            "I",
            "love",
            "this",
            "-f",
            "json",
            "--word-mode",
            "per-occurrence",
            "--negative-threshold",
            "-0.2",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        let Some(Commands::Analyze(args)) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.joined_text(), "I love this");
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.word_mode, Some(WordModeArg::PerOccurrence));
        assert_eq!(args.negative_threshold, Some(-0.2));
    }

    #[test]
    fn test_analyze_requires_text() {
        assert!(Cli::try_parse_from(["sentiscope", "analyze"]).is_err());
    }

    #[test]
    fn test_precision_is_bounded() {
        assert!(Cli::try_parse_from(["sentiscope", "analyze", "x", "--precision", "7"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["sentiscope", "init", "--config", "my.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }
}
