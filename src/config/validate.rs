// src/config/validate.rs

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::config::model::{RawConfigFile, WatchConfig, DEFAULT_DIR, DEFAULT_EVERY_SECS};
use crate::errors::{Result, WatchrunError};
use crate::exec::CommandSpec;
use crate::types::EventMask;
use crate::watch::{PathFilter, DEFAULT_INCLUDE};

impl TryFrom<RawConfigFile> for WatchConfig {
    type Error = WatchrunError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let every = validate_every(raw.every)?;
        let events = parse_events_or_default(raw.events.as_deref());
        let filter = PathFilter::new(
            raw.include.as_deref().unwrap_or(DEFAULT_INCLUDE),
            raw.exclude.as_deref(),
        )?;
        let command = CommandSpec::resolve(raw.command)?;

        Ok(WatchConfig {
            root: PathBuf::from(raw.dir.as_deref().unwrap_or(DEFAULT_DIR)),
            abort_on_failure: raw.abort.unwrap_or(false),
            every,
            events,
            filter,
            command,
            run_on_start: raw.run_on_start.unwrap_or(true),
        })
    }
}

fn validate_every(every: Option<u64>) -> Result<Duration> {
    let secs = every.unwrap_or(DEFAULT_EVERY_SECS);
    if secs == 0 {
        return Err(WatchrunError::ConfigError(
            "every must be >= 1 second (got 0)".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// Parse an event mask, falling back to [`EventMask::DEFAULT`].
///
/// A malformed mask is never fatal; it is reported as a warning.
pub fn parse_events_or_default(events: Option<&str>) -> EventMask {
    let Some(raw) = events else {
        return EventMask::DEFAULT;
    };

    match raw.parse::<EventMask>() {
        Ok(mask) => mask,
        Err(err) => {
            warn!("{err}; using {}", EventMask::DEFAULT);
            EventMask::DEFAULT
        }
    }
}
