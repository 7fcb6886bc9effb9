// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;
use crate::exec::CommandSpec;
use crate::types::EventMask;
use crate::watch::{PathFilter, WatchPolicy};

/// Default root to watch.
pub const DEFAULT_DIR: &str = ".";
/// Default minimum run interval, in seconds.
pub const DEFAULT_EVERY_SECS: u64 = 1;

/// Raw, unvalidated options as read from a TOML config file and/or the CLI.
///
/// Every field is optional; missing fields fall back to the defaults when the
/// options are turned into a [`WatchConfig`]:
///
/// ```toml
/// dir = "src"
/// abort = false
/// every = 2
/// events = "0010"
/// include = '.*\.go$'
/// exclude = '_test\.go$'
/// run_on_start = true
/// command = ["go", "build", "./..."]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    pub dir: Option<String>,
    pub abort: Option<bool>,
    pub every: Option<u64>,
    pub events: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub run_on_start: Option<bool>,
    #[serde(default)]
    pub command: Vec<String>,
}

impl RawConfigFile {
    /// Layer CLI values on top of these (file) values.
    ///
    /// A flag given on the command line always wins; a non-empty positional
    /// command replaces the file's command entirely.
    pub fn overlay_cli(self, args: &CliArgs) -> Self {
        Self {
            dir: args.dir.clone().or(self.dir),
            abort: args.abort.or(self.abort),
            every: args.every.or(self.every),
            events: args.events.clone().or(self.events),
            include: args.include.clone().or(self.include),
            exclude: args.exclude.clone().or(self.exclude),
            run_on_start: args.run_on_start.or(self.run_on_start),
            command: if args.command.is_empty() {
                self.command
            } else {
                args.command.clone()
            },
        }
    }
}

/// Validated, immutable configuration.
///
/// Built once at startup (see [`crate::config::resolve`]) and never mutated.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub root: PathBuf,
    pub abort_on_failure: bool,
    pub every: Duration,
    pub events: EventMask,
    pub filter: PathFilter,
    pub command: CommandSpec,
    pub run_on_start: bool,
}

impl WatchConfig {
    pub fn policy(&self) -> WatchPolicy {
        WatchPolicy::new(self.events, self.filter.clone())
    }
}
