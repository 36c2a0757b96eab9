//! Shared error types for sentiment analysis operations.
//!
//! Library code returns [`SentimentError`]; the command layer and the binary
//! wrap it in `anyhow` with additional context.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sentiscope operations
#[derive(Debug, Error)]
pub enum SentimentError {
    /// Input was empty or whitespace-only after trimming
    #[error("Please enter some text for analysis.")]
    EmptyInput,

    /// The external polarity scorer failed or returned incomplete scores
    #[error("Scoring failed: {0}")]
    Scorer(String),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
}

impl SentimentError {
    /// Create a scorer error
    pub fn scorer(message: impl Into<String>) -> Self {
        Self::Scorer(message.into())
    }

    /// Create a configuration error with path context
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Whether the user can recover by changing the input (as opposed to an
    /// environment or scorer failure).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Title used when the error is shown in a dialog.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Input Error",
            Self::Scorer(_) => "Analysis Error",
            Self::Config { .. } => "Configuration Error",
        }
    }

    /// File the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Config { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, SentimentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message_matches_warning_text() {
        assert_eq!(
            SentimentError::EmptyInput.to_string(),
            "Please enter some text for analysis."
        );
        assert!(SentimentError::EmptyInput.is_input_error());
        assert_eq!(SentimentError::EmptyInput.dialog_title(), "Input Error");
    }

    #[test]
    fn test_scorer_error_is_not_input_error() {
        let err = SentimentError::scorer("lexicon unavailable");
        assert!(!err.is_input_error());
        assert_eq!(err.to_string(), "Scoring failed: lexicon unavailable");
        assert_eq!(err.dialog_title(), "Analysis Error");
    }

    #[test]
    fn test_config_error_keeps_path() {
        let err = SentimentError::config_with_path("bad threshold", "/tmp/.sentiscope.toml");
        assert_eq!(err.to_string(), "Configuration error: bad threshold");
        assert_eq!(err.path(), Some(&PathBuf::from("/tmp/.sentiscope.toml")));
        assert_eq!(err.dialog_title(), "Configuration Error");
    }
}
