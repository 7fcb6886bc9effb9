// src/watch/watcher.rs

use std::path::PathBuf;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::engine::TriggerLatch;
use crate::errors::{Result, WatchrunError};
use crate::watch::event_handler::{handle_event, WatchPolicy};

/// Handle for the filesystem watcher.
///
/// This keeps the underlying `RecommendedWatcher` alive. Dropping the handle
/// stops file watching; the watch loop then drains and exits.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
    root: PathBuf,
    task: JoinHandle<WatchLoopStats>,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl WatcherHandle {
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Stop watching and wait for the loop to finish.
    pub async fn shutdown(self) -> WatchLoopStats {
        let WatcherHandle { _inner, task, .. } = self;
        drop(_inner);
        task.await.unwrap_or_default()
    }
}

/// Counters reported by the watch loop when it ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchLoopStats {
    pub accepted: u64,
    pub ignored: u64,
    pub errors: u64,
}

/// Start watching `root` (non-recursively) and feed accepted events into
/// `latch`.
///
/// Fails if the watcher cannot be created or the root cannot be watched
/// (e.g. it does not exist). Errors reported later by the watcher are logged
/// by the watch loop and never stop it.
pub fn spawn_watcher(
    root: impl Into<PathBuf>,
    policy: WatchPolicy,
    latch: TriggerLatch,
) -> Result<WatcherHandle> {
    let root = root.into();

    // Channels from the blocking notify callback into the async world.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();
    let (error_tx, error_rx) = mpsc::unbounded_channel::<notify::Error>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| {
            let sent = match res {
                Ok(event) => event_tx.send(event).is_ok(),
                Err(err) => error_tx.send(err).is_ok(),
            };
            if !sent {
                // We can't log via tracing reliably here; fall back to stderr.
                eprintln!("watchrun: watch loop is gone; dropping notification");
            }
        },
        Config::default(),
    )
    .map_err(|source| WatchrunError::WatchInit {
        path: root.clone(),
        source,
    })?;

    watcher
        .watch(&root, RecursiveMode::NonRecursive)
        .map_err(|source| WatchrunError::WatchInit {
            path: root.clone(),
            source,
        })?;

    info!(root = %root.display(), "file watcher started");

    let task = tokio::spawn(run_watch_loop(event_rx, error_rx, policy, latch));

    Ok(WatcherHandle {
        _inner: watcher,
        root,
        task,
    })
}

/// Drain the event and error streams until both are closed.
///
/// Neither stream has priority: whichever notification is ready first is
/// handled first.
pub async fn run_watch_loop(
    mut events: mpsc::UnboundedReceiver<Event>,
    mut errors: mpsc::UnboundedReceiver<notify::Error>,
    policy: WatchPolicy,
    latch: TriggerLatch,
) -> WatchLoopStats {
    let mut stats = WatchLoopStats::default();

    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                if handle_event(&policy, &latch, &event) {
                    stats.accepted += 1;
                } else {
                    stats.ignored += 1;
                }
            }
            Some(err) = errors.recv() => {
                stats.errors += 1;
                warn!(error = %err, paths = ?err.paths, "file watch error");
            }
            else => break,
        }
    }

    debug!(?stats, "watch loop finished");
    stats
}
