//! `.sentiscope.toml` configuration.
//!
//! Discovery order: `--config <FILE>`, then `.sentiscope.toml` in the current
//! directory or one of its ancestors, then the user config directory, then
//! built-in defaults.

mod core;
mod loader;

pub use self::core::{
    default_precision, OutputConfig, ReportFormat, SentiscopeConfig, WordsConfig, MAX_PRECISION,
};
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config, load_config_file,
    parse_and_validate_config, resolve_config, user_config_path,
};

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = ".sentiscope.toml";
