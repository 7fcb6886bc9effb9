// src/watch/patterns.rs

use std::fmt;
use std::path::Path;

use regex::Regex;

use crate::errors::{Result, WatchrunError};

/// Include pattern used when none is configured.
pub const DEFAULT_INCLUDE: &str = ".*";

/// Compiled include/exclude regular expressions.
///
/// Patterns are matched (unanchored) against the path string exactly as the
/// event source reports it; nothing is made relative or normalized first.
/// Without an exclude pattern nothing is excluded.
#[derive(Clone)]
pub struct PathFilter {
    include: Regex,
    exclude: Option<Regex>,
}

impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFilter")
            .field("include", &self.include.as_str())
            .field("exclude", &self.exclude.as_ref().map(Regex::as_str))
            .finish()
    }
}

impl PathFilter {
    /// Compile a filter from raw pattern strings.
    ///
    /// A malformed pattern is reported as [`WatchrunError::InvalidPattern`].
    pub fn new(include: &str, exclude: Option<&str>) -> Result<Self> {
        let include = compile("include", include)?;
        let exclude = exclude.map(|pat| compile("exclude", pat)).transpose()?;
        Ok(Self { include, exclude })
    }

    pub fn include(&self) -> &str {
        self.include.as_str()
    }

    pub fn exclude(&self) -> Option<&str> {
        self.exclude.as_ref().map(Regex::as_str)
    }

    /// True if `path` matches the include pattern and not the exclude pattern.
    pub fn accepts(&self, path: &Path) -> bool {
        self.accepts_str(&path.to_string_lossy())
    }

    pub fn accepts_str(&self, path: &str) -> bool {
        if !self.include.is_match(path) {
            return false;
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(path),
            None => true,
        }
    }
}

fn compile(kind: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| WatchrunError::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
        source,
    })
}
