//! Logging, crash reports, and context tracking.
//!
//! Install the panic hook and logging at startup:
//!
//! ```ignore
//! use sentiscope::observability::{init_logging, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_logging(0);
//! }
//! ```

pub mod context;
pub mod logging;
pub mod panic_hook;

pub use context::{
    enter_recoverable_scope, get_completed, get_current_context, increment_completed,
    set_phase, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use logging::{init_logging, is_tui_active, set_tui_active, LOG_ENV_VAR};
pub use panic_hook::install_panic_hook;
