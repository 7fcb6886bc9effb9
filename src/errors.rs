// src/errors.rs

//! Crate-wide error types.
//!
//! [`WatchrunError`] covers everything that stops `watchrun` before it starts
//! watching. [`RunError`] describes a single failed command run; it never
//! leaves the scheduler unless abort-on-failure turns it into a termination.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchrunError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid {kind} pattern {pattern:?}: {source}")]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("command not found: {program}")]
    CommandNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("Failed to watch {path:?}: {source}")]
    WatchInit {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Why a single run of the command failed.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("failed to launch {program:?}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for {program:?}: {source}")]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("command exited with status {code}")]
    Exit { code: i32 },

    #[error("command was terminated by a signal")]
    Signaled,
}

pub type Result<T> = std::result::Result<T, WatchrunError>;
