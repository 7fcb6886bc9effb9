// src/engine/scheduler.rs

use std::fmt;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::exec::CommandRunner;

use super::core::{AfterRun, SchedulerCore, TickAction};
use super::latch::TriggerLatch;
use super::termination::{Termination, TerminationCause};

#[derive(Debug, Clone, Copy)]
pub struct SchedulerOptions {
    /// Tick period; also the minimum time between two runs starting.
    pub every: Duration,
    pub abort_on_failure: bool,
}

/// Result of a single tick, exposed for tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Succeeded,
    Failed,
    Aborted,
}

/// Drives the command runner from a fixed-interval clock.
///
/// The scheduler is fully sequential: a run is awaited before the next tick is
/// considered, so two runs never overlap. Ticks missed while a run was in
/// progress collapse into one immediate tick, and the clock restarts from
/// there, so two runs never start less than `every` apart.
pub struct RunScheduler<R: CommandRunner> {
    core: SchedulerCore,
    latch: TriggerLatch,
    runner: R,
    termination: Termination,
    every: Duration,
}

impl<R: CommandRunner> fmt::Debug for RunScheduler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunScheduler")
            .field("core", &self.core)
            .field("latch", &self.latch)
            .field("every", &self.every)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner> RunScheduler<R> {
    pub fn new(
        options: SchedulerOptions,
        latch: TriggerLatch,
        runner: R,
        termination: Termination,
    ) -> Self {
        Self {
            core: SchedulerCore::new(options.abort_on_failure),
            latch,
            runner,
            termination,
            every: options.every,
        }
    }

    /// Handle one tick: run the command if a run is pending.
    pub async fn tick(&mut self) -> TickOutcome {
        match self.core.on_tick(&self.latch) {
            TickAction::Idle => return TickOutcome::Idle,
            TickAction::Stopped => return TickOutcome::Aborted,
            TickAction::Run => {}
        }

        let report = self.runner.run().await;
        let decision = self.core.on_run_finished(&report);

        match (report.result, decision) {
            (Ok(()), _) => TickOutcome::Succeeded,
            (Err(err), AfterRun::Continue) => {
                warn!(error = %err, "command failed; continuing to watch");
                TickOutcome::Failed
            }
            (Err(err), AfterRun::Abort) => {
                error!(error = %err, "command failed; aborting");
                self.termination.fire(TerminationCause::Aborted(err));
                TickOutcome::Aborted
            }
        }
    }

    /// Main ticking loop. Returns only after an abort.
    pub async fn run(mut self) -> TickOutcome {
        info!(every = ?self.every, "run scheduler started");

        let mut ticker = time::interval(self.every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let outcome = self.tick().await;
            debug!(?outcome, runs = self.core.runs(), "tick processed");

            if outcome == TickOutcome::Aborted {
                info!(
                    runs = self.core.runs(),
                    failures = self.core.failures(),
                    "run scheduler stopped"
                );
                return outcome;
            }
        }
    }

    pub fn runs(&self) -> u64 {
        self.core.runs()
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
