//! Tracing subscriber setup.
//!
//! Logs go to stderr. While the interactive UI owns the terminal, output is
//! discarded so the alternate screen stays intact.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the verbosity-derived filter.
pub const LOG_ENV_VAR: &str = "SENTISCOPE_LOG";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the TUI currently owns the terminal.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Map `-v` count to a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(|| -> Box<dyn io::Write> {
            if is_tui_active() {
                Box::new(io::sink())
            } else {
                Box::new(io::stderr())
            }
        })
        .try_init();

    if let Err(e) = result {
        // Already configured
        log::debug!("Logging already initialized: {}", e);
    }
}
