// src/watch/mod.rs

//! File watching and event filtering.
//!
//! This module is responsible for:
//! - Classifying raw `notify` events into create/modify/delete/rename.
//! - Compiling the include/exclude regular expressions.
//! - Wiring up the filesystem watcher and the loop that drains its event and
//!   error streams into the trigger latch.
//!
//! It does **not** run commands; it only marks a run as pending.

pub mod classify;
pub mod event_handler;
pub mod patterns;
pub mod watcher;

pub use classify::{classify, enabled_by};
pub use event_handler::{handle_event, WatchPolicy};
pub use patterns::{PathFilter, DEFAULT_INCLUDE};
pub use watcher::{run_watch_loop, spawn_watcher, WatchLoopStats, WatcherHandle};
