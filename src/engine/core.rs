// src/engine/core.rs

//! Pure scheduling decisions.
//!
//! [`SchedulerCore`] decides what a tick does and what happens after a run,
//! without timers, processes or channels. The async shell in
//! [`super::scheduler`] owns the clock and the runner and simply follows the
//! decisions made here.

use crate::engine::latch::TriggerLatch;
use crate::exec::RunReport;

/// What the shell should do on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Nothing pending.
    Idle,
    /// Run the command now. The latch has already been cleared.
    Run,
    /// The scheduler has stopped; no more ticks should be processed.
    Stopped,
}

/// What the shell should do after a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterRun {
    Continue,
    /// Fire the termination signal and stop ticking.
    Abort,
}

#[derive(Debug)]
pub struct SchedulerCore {
    abort_on_failure: bool,
    stopped: bool,
    runs: u64,
    failures: u64,
}

impl SchedulerCore {
    pub fn new(abort_on_failure: bool) -> Self {
        Self {
            abort_on_failure,
            stopped: false,
            runs: 0,
            failures: 0,
        }
    }

    pub fn on_tick(&mut self, latch: &TriggerLatch) -> TickAction {
        if self.stopped {
            return TickAction::Stopped;
        }
        if latch.take() {
            TickAction::Run
        } else {
            TickAction::Idle
        }
    }

    pub fn on_run_finished(&mut self, report: &RunReport) -> AfterRun {
        self.runs += 1;
        if report.is_success() {
            return AfterRun::Continue;
        }

        self.failures += 1;
        if self.abort_on_failure {
            self.stopped = true;
            AfterRun::Abort
        } else {
            AfterRun::Continue
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Number of completed runs.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }
}
