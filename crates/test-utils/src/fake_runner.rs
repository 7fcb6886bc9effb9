use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::time::Instant;
use watchrun::errors::RunError;
use watchrun::exec::{CommandRunner, RunReport};

/// Scripted outcome for one fake run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeOutcome {
    Success,
    /// Exit with the given non-zero status.
    Exit(i32),
}

/// A fake command runner that:
/// - records the (tokio clock) instant of every run
/// - returns scripted outcomes, falling back to `default` once the script is
///   exhausted.
#[derive(Clone)]
pub struct FakeRunner {
    runs: Arc<Mutex<Vec<Instant>>>,
    script: Arc<Mutex<VecDeque<FakeOutcome>>>,
    default: FakeOutcome,
}

impl FakeRunner {
    /// Runner whose every run succeeds.
    pub fn succeeding() -> Self {
        Self::with_default(FakeOutcome::Success)
    }

    /// Runner whose every run exits with status 1.
    pub fn failing() -> Self {
        Self::with_default(FakeOutcome::Exit(1))
    }

    pub fn with_default(default: FakeOutcome) -> Self {
        Self {
            runs: Arc::new(Mutex::new(Vec::new())),
            script: Arc::new(Mutex::new(VecDeque::new())),
            default,
        }
    }

    /// Queue outcomes for the next runs, in order.
    pub fn script(self, outcomes: impl IntoIterator<Item = FakeOutcome>) -> Self {
        self.script.lock().unwrap().extend(outcomes);
        self
    }

    pub fn run_count(&self) -> usize {
        self.runs.lock().unwrap().len()
    }

    pub fn run_instants(&self) -> Vec<Instant> {
        self.runs.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&mut self) -> Pin<Box<dyn Future<Output = RunReport> + Send + '_>> {
        let runs = Arc::clone(&self.runs);
        let script = Arc::clone(&self.script);
        let default = self.default;

        Box::pin(async move {
            runs.lock().unwrap().push(Instant::now());
            let outcome = script.lock().unwrap().pop_front().unwrap_or(default);

            match outcome {
                FakeOutcome::Success => RunReport::success(b"ok\n".to_vec()),
                FakeOutcome::Exit(code) => {
                    RunReport::failure(RunError::Exit { code }, b"failed\n".to_vec())
                }
            }
        })
    }
}
