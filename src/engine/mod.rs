// src/engine/mod.rs

//! Scheduling engine for watchrun.
//!
//! This module ties together:
//! - the trigger latch shared with the watch loop
//! - the fixed-interval run scheduler and its abort policy
//! - the single-shot termination signal observed by the main task
//!
//! The pure decision logic lives in [`core`]; the async clock-driven shell is
//! implemented in [`scheduler`].

pub mod core;
pub mod latch;
pub mod scheduler;
pub mod termination;

pub use self::core::{AfterRun, SchedulerCore, TickAction};
pub use self::latch::TriggerLatch;
pub use scheduler::{RunScheduler, SchedulerOptions, TickOutcome};
pub use termination::{termination, Termination, TerminationCause, TerminationWaiter};
