// src/config/mod.rs

//! Configuration loading and validation.
//!
//! Values come from three layers, lowest priority first: built-in defaults,
//! an optional TOML file (`--config`), and command-line flags.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, merged_options, resolve};
pub use model::{RawConfigFile, WatchConfig, DEFAULT_DIR, DEFAULT_EVERY_SECS};
pub use validate::parse_events_or_default;
