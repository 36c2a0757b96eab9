//! Runtime setup for the binary: crash reporting, logging, and config.

use crate::config::{resolve_config, SentiscopeConfig};
use crate::observability::{init_logging, install_panic_hook};
use std::path::Path;

/// Install the panic hook, then the log subscriber at the given `-v` level.
pub fn init_runtime(verbosity: u8) {
    install_panic_hook();
    init_logging(verbosity);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sentiscope starting");
}

/// Resolve configuration for the binary, naming the offending file on error.
pub fn load_cli_config(explicit: Option<&Path>) -> anyhow::Result<SentiscopeConfig> {
    resolve_config(explicit).map_err(|err| match err.path().cloned() {
        Some(path) => anyhow::Error::new(err).context(format!(
            "Failed to load configuration from {}",
            path.display()
        )),
        None => err.into(),
    })
}
