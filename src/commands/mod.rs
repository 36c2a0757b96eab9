//! Command implementations.
//!
//! - **analyze**: one-shot analysis of text given on the command line
//! - **init**: write a default `.sentiscope.toml`
//! - **interactive**: the terminal UI

pub mod analyze;
pub mod init;
pub mod interactive;

pub use analyze::{handle_analyze, run_analysis};
pub use init::{init_config, init_config_at};
pub use interactive::run_interactive;
