//! Shared signal that band data changed.
//!
//! Every successful create, update, or delete bumps the version; open tables
//! poll it and reload when the number they rendered with falls behind. The
//! counter is process-local state shared across all workers.
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RefreshCounter {
    version: AtomicU64,
}

impl RefreshCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a data change and returns the new version.
    pub fn notify(&self) -> u64 {
        self.version.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Version of the most recent data change.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Relaxed)
    }
}
