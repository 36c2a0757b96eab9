//! CLI module for sentiscope
//!
//! - Argument parsing (`args`)
//! - Merging flags over the config file (`config_builder`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod config_builder;
pub mod setup;

pub use args::{AnalyzeArgs, Cli, Commands, OutputFormat, WordModeArg};
pub use config_builder::{
    build_analyze_settings, build_tui_settings, create_formatting_config, AnalyzeSettings,
    TuiSettings,
};
pub use setup::{init_runtime, load_cli_config};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
