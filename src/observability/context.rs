//! Thread-local context tracking for crash reports.
//!
//! Records which phase of a run is active and whether a panic at this point
//! will be caught and turned into an error. Context guards use RAII to restore
//! the previous context on drop, so phases nest.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of analyses completed in this process (shown in crash reports).
static ANALYSES_COMPLETED: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    /// Current phase
    pub phase: Option<AnalysisPhase>,
    /// A caller up the stack catches panics and reports them as errors
    pub recoverable: bool,
}

impl AnalysisContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            recoverable: false,
        }
    }
}

/// Phases of a sentiscope run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Loading `.sentiscope.toml`
    ConfigLoading,
    /// Calling the polarity scorer
    Scoring,
    /// Writing a report
    OutputGeneration,
    /// Drawing the interactive UI
    Rendering,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigLoading => write!(f, "config_loading"),
            Self::Scoring => write!(f, "scoring"),
            Self::OutputGeneration => write!(f, "output_generation"),
            Self::Rendering => write!(f, "rendering"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update_context(apply: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase. Returns a guard that restores the previous phase.
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update_context(|ctx| ctx.phase = Some(phase))
}

/// Mark that panics raised while the guard lives are caught by the caller.
///
/// The panic hook logs such panics instead of printing a crash report.
#[must_use]
pub fn enter_recoverable_scope() -> ContextGuard {
    update_context(|ctx| ctx.recoverable = true)
}

/// Get the current context snapshot.
#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

pub fn increment_completed() {
    ANALYSES_COMPLETED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_completed() -> usize {
    ANALYSES_COMPLETED.load(Ordering::Relaxed)
}

#[cfg(test)]
pub(crate) fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = AnalysisContext::new();
    });
}
