//! Cooperative cancellation for long-running tile renders.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared "still wanted" flag.
///
/// A render checks the flag between its major phases (read, resample,
/// render) and abandons producing output once it is raised. Clones share
/// the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag. Renders observing it return without output.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
