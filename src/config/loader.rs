use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{default_precision, SentiscopeConfig, MAX_PRECISION};
use super::CONFIG_FILE_NAME;
use crate::errors::{Result, SentimentError};
use crate::observability::{set_phase, AnalysisPhase};
use crate::sentiment::VerdictThresholds;

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read a config file into a string
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string and repair out-of-range values.
///
/// Invalid thresholds fall back to the defaults and an oversized precision is
/// clamped; both are logged as warnings. Only syntax and type errors fail.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<SentiscopeConfig, String> {
    let mut config = toml::from_str::<SentiscopeConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(thresholds) = config.thresholds {
        if let Err(e) = thresholds.validate() {
            log::warn!("Invalid thresholds: {}. Using defaults.", e);
            config.thresholds = Some(VerdictThresholds::default());
        }
    }

    if let Some(ref mut output) = config.output {
        if output.precision > MAX_PRECISION {
            log::warn!(
                "Precision {} exceeds maximum of {}. Clamping.",
                output.precision,
                MAX_PRECISION
            );
            output.precision = MAX_PRECISION;
        }
    }

    Ok(config)
}

/// Try loading config from a specific path, logging failures
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SentiscopeConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate `start` and its ancestors, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `<config_dir>/sentiscope/config.toml`, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sentiscope").join("config.toml"))
}

/// Search `start` and its ancestors for `.sentiscope.toml`, then the user
/// config directory.
pub fn discover_config(start: PathBuf) -> SentiscopeConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .or_else(|| user_config_path().and_then(|path| try_load_config_from_path(&path)))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SentiscopeConfig::default()
        })
}

/// Discover configuration from the current directory
pub fn load_config() -> SentiscopeConfig {
    let _phase = set_phase(AnalysisPhase::ConfigLoading);

    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SentiscopeConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// unparsable file is an error.
pub fn load_config_file(path: &Path) -> Result<SentiscopeConfig> {
    let _phase = set_phase(AnalysisPhase::ConfigLoading);

    let contents = read_config_file(path).map_err(|e| {
        SentimentError::config_with_path(format!("cannot read file: {}", e), path)
    })?;
    parse_and_validate_config(&contents).map_err(|e| SentimentError::config_with_path(e, path))
}

/// Explicit path if given, discovery otherwise
pub fn resolve_config(explicit: Option<&Path>) -> Result<SentiscopeConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config()),
    }
}

/// Default contents written by `sentiscope init`
pub fn default_config_toml() -> String {
    format!(
        r#"# Sentiscope Configuration

[thresholds]
# compound >= positive is Positive, compound <= negative is Negative
positive = 0.05
negative = -0.05

[words]
# "unique" collapses repeated words, "per-occurrence" lists every token
mode = "unique"

[output]
default_format = "terminal"
precision = {}
"#,
        default_precision()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportFormat;
    use crate::sentiment::WordScoreMode;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [thresholds]
            positive = 0.2
            negative = -0.3

            [words]
            mode = "per-occurrence"

            [output]
            default_format = "json"
            precision = 3
        "#})
        .unwrap();

        assert_eq!(config.verdict_thresholds().positive, 0.2);
        assert_eq!(config.verdict_thresholds().negative, -0.3);
        assert_eq!(config.word_mode(), WordScoreMode::PerOccurrence);
        assert_eq!(config.default_format(), ReportFormat::Json);
        assert_eq!(config.precision(), 3);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, SentiscopeConfig::default());
        assert_eq!(config.verdict_thresholds().positive, 0.05);
        assert_eq!(config.verdict_thresholds().negative, -0.05);
        assert_eq!(config.word_mode(), WordScoreMode::Unique);
        assert_eq!(config.precision(), 2);
    }

    #[test]
    fn test_inverted_thresholds_fall_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [thresholds]
            positive = -0.5
            negative = 0.5
        "#})
        .unwrap();
        assert_eq!(config.thresholds, Some(VerdictThresholds::default()));
    }

    #[test]
    fn test_partial_thresholds_keep_other_default() {
        let config = parse_and_validate_config("[thresholds]\npositive = 0.2\n").unwrap();
        assert_eq!(config.thresholds, Some(VerdictThresholds::new(0.2, -0.05)));
    }

    #[test]
    fn test_precision_is_clamped() {
        let config = parse_and_validate_config("[output]\nprecision = 12\n").unwrap();
        assert_eq!(config.precision(), MAX_PRECISION);
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = parse_and_validate_config("[thresholds\npositive = ").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_default_config_toml_round_trips() {
        let config = parse_and_validate_config(&default_config_toml()).unwrap();
        assert_eq!(config.verdict_thresholds().positive, 0.05);
        assert_eq!(config.word_mode(), WordScoreMode::Unique);
        assert_eq!(config.default_format(), ReportFormat::Terminal);
    }

    #[test]
    fn test_discover_config_from_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[words]\nmode = \"per-occurrence\"\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert_eq!(config.word_mode(), WordScoreMode::PerOccurrence);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = load_config_file(&missing).unwrap_err();
        assert!(matches!(err, SentimentError::Config { .. }));
        assert_eq!(err.path(), Some(&missing));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
