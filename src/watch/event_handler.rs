// src/watch/event_handler.rs

//! Event processing logic for file system changes.

use std::path::Path;

use notify::Event;
use tracing::{debug, info};

use crate::engine::TriggerLatch;
use crate::types::EventMask;
use crate::watch::classify::classify;
use crate::watch::patterns::PathFilter;

/// Decides which raw events may trigger a run.
#[derive(Debug, Clone)]
pub struct WatchPolicy {
    mask: EventMask,
    filter: PathFilter,
}

impl WatchPolicy {
    pub fn new(mask: EventMask, filter: PathFilter) -> Self {
        Self { mask, filter }
    }

    pub fn mask(&self) -> EventMask {
        self.mask
    }

    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }

    /// Return the first path of `event` that makes it eligible to trigger a
    /// run, or `None` if the event is rejected.
    ///
    /// The event kind must map to a category enabled in the mask, and at
    /// least one of its paths must pass the include/exclude filter.
    pub fn accepted_path<'a>(&self, event: &'a Event) -> Option<&'a Path> {
        if !classify(&event.kind).intersects(self.mask) {
            return None;
        }
        event
            .paths
            .iter()
            .map(|p| p.as_path())
            .find(|p| self.filter.accepts(p))
    }
}

/// Process a single change event.
///
/// Sets the latch and returns `true` if the event was accepted.
pub fn handle_event(policy: &WatchPolicy, latch: &TriggerLatch, event: &Event) -> bool {
    match policy.accepted_path(event) {
        Some(path) => {
            info!(path = %path.display(), kind = ?event.kind, "event accepted");
            latch.set();
            true
        }
        None => {
            debug!(paths = ?event.paths, kind = ?event.kind, "event ignored");
            false
        }
    }
}
