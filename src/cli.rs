// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Flags may also be written the single-dash way (`-dir src`, `-every 2`,
//! `-abort=false`); [`normalize_legacy_flags`] rewrites them before `clap`
//! sees them.

use std::ffi::OsString;

use clap::{CommandFactory, Parser, ValueEnum};

/// Command-line arguments for `watchrun`.
///
/// Everything is optional here so that CLI values can be layered over a
/// config file; defaults are applied when the configuration is validated.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "watchrun",
    version,
    about = "Re-run a command whenever files in a directory change.",
    override_usage = "watchrun [OPTIONS] <COMMAND> [ARGS]...",
    long_about = None
)]
pub struct CliArgs {
    /// The directory to monitor (non-recursive). Default: `.`
    #[arg(long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Abort and stop monitoring when the command fails.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub abort: Option<bool>,

    /// Run the command at most every given seconds. Default: 1
    #[arg(long, value_name = "SECONDS")]
    pub every: Option<u64>,

    /// Events to monitor, as a bitstring in the order RENAME|DELETE|MODIFY|CREATE.
    ///
    /// For example `0010` monitors MODIFY events only, `1100` monitors RENAME
    /// and DELETE events. Default: `0011`
    #[arg(long, value_name = "BITS")]
    pub events: Option<String>,

    /// Regular expression of the paths that will be monitored. Default: `.*`
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub include: Option<String>,

    /// Regular expression of the paths that will NOT be monitored.
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub exclude: Option<String>,

    /// Run the command once at startup instead of waiting for the first event.
    /// Default: true
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub run_on_start: Option<bool>,

    /// Optional TOML file providing any of the options above.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// The command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &[
    "dir",
    "every",
    "events",
    "include",
    "exclude",
    "config",
    "log-level",
];

/// Rewrite single-dash long flags (`-dir`) into `--dir`.
///
/// Only the option section is touched: rewriting stops at `--` or at the
/// first argument that is not a flag or a flag value, since everything from
/// there on belongs to the command.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = Vec::new();

    // Program name.
    if let Some(first) = iter.next() {
        out.push(first);
    }

    let mut expect_value = false;
    let mut in_options = true;

    for arg in iter {
        if !in_options {
            out.push(arg);
            continue;
        }
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            in_options = false;
            out.push(arg);
            continue;
        };

        if s == "--" || !s.starts_with('-') || s == "-" {
            in_options = false;
            out.push(arg);
            continue;
        }

        let long = if s.starts_with("--") {
            s.to_string()
        } else if s.len() > 2 {
            format!("-{s}")
        } else {
            // Single-character short flag such as `-h`.
            out.push(arg);
            continue;
        };

        let name = long.trim_start_matches('-');
        if !name.contains('=') && VALUE_FLAGS.contains(&name) {
            expect_value = true;
        }
        out.push(OsString::from(long));
    }

    out
}

/// Parse the process arguments, accepting single-dash long flags.
pub fn parse() -> CliArgs {
    CliArgs::parse_from(normalize_legacy_flags(std::env::args_os()))
}

/// Print the usage/help text to stdout.
pub fn print_usage() -> std::io::Result<()> {
    CliArgs::command().print_help()
}
