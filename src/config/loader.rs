// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{RawConfigFile, WatchConfig};
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; it does **not** validate
/// patterns, the interval or the command. Use [`resolve`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Merge the optional `--config` file with the CLI flags, without validating.
///
/// The caller uses this to decide whether a command was given at all before
/// committing to full validation.
pub fn merged_options(args: &CliArgs) -> Result<RawConfigFile> {
    let file = match &args.config {
        Some(path) => load_from_path(path)?,
        None => RawConfigFile::default(),
    };
    Ok(file.overlay_cli(args))
}

/// Build the validated [`WatchConfig`] from CLI flags and config file.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads the TOML file named by `--config`, if any.
/// - Applies CLI overrides.
/// - Validates: regexes compile, interval >= 1s, command resolves on `PATH`.
///   An invalid event mask falls back to the default with a warning.
pub fn resolve(args: &CliArgs) -> Result<WatchConfig> {
    let raw = merged_options(args)?;
    WatchConfig::try_from(raw)
}
