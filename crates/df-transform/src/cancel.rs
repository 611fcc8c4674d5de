use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to stop an in-progress run between records.
///
/// Clones share the same flag, so one clone can be handed to a signal
/// handler while the run polls another.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancel_flag: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }
}
