// src/engine/termination.rs

//! Single-shot termination signal.
//!
//! [`Termination`] handles are cloned into every task that may end the
//! process (the scheduler on abort, the Ctrl-C listener). Only the first
//! [`Termination::fire`] is delivered; later calls are no-ops. The main task
//! owns the matching [`TerminationWaiter`] and blocks on it.

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::errors::RunError;

/// Why the process is shutting down.
#[derive(Debug)]
pub enum TerminationCause {
    /// A run failed while abort-on-failure was enabled.
    Aborted(RunError),
    /// Ctrl-C.
    Interrupted,
    /// Every [`Termination`] handle was dropped without firing.
    Closed,
}

impl TerminationCause {
    /// Whether the process should report failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, TerminationCause::Aborted(_))
    }
}

#[derive(Debug, Clone)]
pub struct Termination {
    tx: Arc<Mutex<Option<oneshot::Sender<TerminationCause>>>>,
}

#[derive(Debug)]
pub struct TerminationWaiter {
    rx: oneshot::Receiver<TerminationCause>,
}

/// Create a connected termination handle / waiter pair.
pub fn termination() -> (Termination, TerminationWaiter) {
    let (tx, rx) = oneshot::channel();
    (
        Termination {
            tx: Arc::new(Mutex::new(Some(tx))),
        },
        TerminationWaiter { rx },
    )
}

impl Termination {
    /// Fire the signal.
    ///
    /// Returns `true` if this call delivered the signal, `false` if it had
    /// already been fired (or the waiter is gone).
    pub fn fire(&self, cause: TerminationCause) -> bool {
        let sender = match self.tx.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => {
                warn!("termination mutex poisoned; recovering");
                poisoned.into_inner().take()
            }
        };

        match sender {
            Some(tx) => tx.send(cause).is_ok(),
            None => {
                debug!(?cause, "termination already fired; ignoring");
                false
            }
        }
    }

    pub fn is_fired(&self) -> bool {
        match self.tx.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

impl TerminationWaiter {
    /// Wait until the signal fires.
    pub async fn wait(self) -> TerminationCause {
        self.rx.await.unwrap_or(TerminationCause::Closed)
    }
}
