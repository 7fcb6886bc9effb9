// src/engine/latch.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "a run is pending" flag.
///
/// The watch loop calls [`TriggerLatch::set`] for every accepted event; the
/// scheduler calls [`TriggerLatch::take`] once per tick. The flag carries no
/// count, so any number of events between two ticks collapse into one run.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct TriggerLatch {
    pending: Arc<AtomicBool>,
}

impl TriggerLatch {
    pub fn new(pending: bool) -> Self {
        Self {
            pending: Arc::new(AtomicBool::new(pending)),
        }
    }

    /// Mark a run as pending.
    pub fn set(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Atomically read and clear the flag.
    ///
    /// Returns `true` if a run was pending. An event accepted after this call
    /// (e.g. while the command is running) sets the flag again and is picked
    /// up by the next tick.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_set(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
