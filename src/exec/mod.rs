// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] resolves the command on `PATH` and runs it with
//!   `tokio::process::Command`, capturing and relaying combined output.
//! - [`backend`] provides the [`CommandRunner`] trait the scheduler talks to,
//!   which tests replace with a fake implementation.

pub mod backend;
pub mod command;

pub use backend::{CommandRunner, RunReport};
pub use command::{CommandSpec, ProcessRunner};
