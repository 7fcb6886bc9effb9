// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;
pub mod watch;

use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::WatchConfig;
use crate::engine::{
    termination, RunScheduler, SchedulerOptions, Termination, TerminationCause, TriggerLatch,
};
use crate::errors::Result;
use crate::exec::ProcessRunner;

/// How a `watchrun` invocation ended.
#[derive(Debug)]
pub enum Exit {
    /// No command was given; usage was printed.
    Usage,
    /// The termination signal fired.
    Terminated(TerminationCause),
}

impl Exit {
    /// Whether the process should exit with a failure status.
    pub fn is_failure(&self) -> bool {
        match self {
            Exit::Usage => false,
            Exit::Terminated(cause) => cause.is_failure(),
        }
    }
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and validation (fatal on error)
/// - the file watcher and its watch loop
/// - the run scheduler and process runner
/// - Ctrl-C handling
///
/// and then blocks until the termination signal fires.
pub async fn run(args: CliArgs) -> Result<Exit> {
    let raw = config::merged_options(&args)?;
    if raw.command.is_empty() {
        cli::print_usage()?;
        return Ok(Exit::Usage);
    }

    let cfg = WatchConfig::try_from(raw)?;
    let cause = watch_and_run(cfg).await?;
    Ok(Exit::Terminated(cause))
}

/// Watch `cfg.root` and run `cfg.command` until termination.
pub async fn watch_and_run(cfg: WatchConfig) -> Result<TerminationCause> {
    info!(
        root = %cfg.root.display(),
        every = ?cfg.every,
        events = %cfg.events,
        include = cfg.filter.include(),
        exclude = cfg.filter.exclude().unwrap_or(""),
        abort = cfg.abort_on_failure,
        run_on_start = cfg.run_on_start,
        cmd = %cfg.command.display(),
        "watchrun starting"
    );

    let (term, waiter) = termination();
    let latch = TriggerLatch::new(cfg.run_on_start);

    // The watcher must be up before the first tick, so a bad root never
    // results in a run.
    let watcher = watch::spawn_watcher(cfg.root.clone(), cfg.policy(), latch.clone())?;

    spawn_ctrl_c_listener(term.clone());

    let options = SchedulerOptions {
        every: cfg.every,
        abort_on_failure: cfg.abort_on_failure,
    };
    let scheduler = RunScheduler::new(options, latch, ProcessRunner::new(cfg.command), term);
    let scheduler_task = tokio::spawn(scheduler.run());

    let cause = waiter.wait().await;
    info!(?cause, "termination signal received");

    scheduler_task.abort();
    let stats = watcher.shutdown().await;
    info!(
        accepted = stats.accepted,
        ignored = stats.ignored,
        errors = stats.errors,
        "watch loop stopped"
    );

    Ok(cause)
}

/// Ctrl-C -> graceful shutdown.
fn spawn_ctrl_c_listener(term: Termination) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {e}");
            return;
        }
        term.fire(TerminationCause::Interrupted);
    });
}
