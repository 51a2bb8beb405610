use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "keep rendering" switch.
///
/// Clones observe the same flag, so any thread holding one can stop the loop.
/// Once stopped it stays stopped.
#[derive(Debug, Clone)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    /// A flag in the running state.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Requests loop termination; the current frame still completes.
    pub fn stop(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Runs one loop iteration and reports whether the next one should be
    /// scheduled.
    ///
    /// `frame` is skipped once the flag is cleared. A frame returning `false`
    /// (unrecoverable failure) clears the flag.
    pub fn run_frame(&self, frame: impl FnOnce() -> bool) -> bool {
        if !self.is_running() {
            return false;
        }
        if !frame() {
            self.stop();
            return false;
        }
        self.is_running()
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}
