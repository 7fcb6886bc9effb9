// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The scheduler talks to a [`CommandRunner`] instead of spawning processes
//! itself. Production code uses [`ProcessRunner`](super::ProcessRunner);
//! tests provide runners that record calls and return scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::RunError;

/// Result of one run of the command.
#[derive(Debug)]
pub struct RunReport {
    /// Combined stdout/stderr of the run, in arrival order.
    pub output: Vec<u8>,
    pub result: Result<(), RunError>,
}

impl RunReport {
    pub fn success(output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
            result: Ok(()),
        }
    }

    pub fn failure(error: RunError, output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
            result: Err(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Trait abstracting how the watched command is executed.
pub trait CommandRunner: Send {
    /// Run the command once and wait for it to finish.
    ///
    /// Implementations report failures through [`RunReport::result`]; they
    /// never panic or bubble errors out of the scheduler.
    fn run(&mut self) -> Pin<Box<dyn Future<Output = RunReport> + Send + '_>>;
}
