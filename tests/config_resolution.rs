use std::fs;
use std::time::Duration;

use clap::Parser;
use tempfile::TempDir;

use watchrun::cli::{normalize_legacy_flags, CliArgs, LogLevel};
use watchrun::config::{self, RawConfigFile, WatchConfig};
use watchrun::errors::WatchrunError;
use watchrun::logging::effective_level;
use watchrun::types::EventMask;
use watchrun_test_utils::builders::CliArgsBuilder;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("watchrun.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_apply_when_only_a_command_is_given() {
    let args = CliArgsBuilder::new().command(&["sh", "-c", "true"]).build();
    let cfg = config::resolve(&args).unwrap();

    assert_eq!(cfg.root, std::path::PathBuf::from("."));
    assert!(!cfg.abort_on_failure);
    assert_eq!(cfg.every, Duration::from_secs(1));
    assert_eq!(cfg.events, EventMask::DEFAULT);
    assert_eq!(cfg.filter.include(), ".*");
    assert_eq!(cfg.filter.exclude(), None);
    assert!(cfg.run_on_start);
    assert_eq!(cfg.command.argv(), ["sh", "-c", "true"]);
}

#[test]
fn cli_flags_override_the_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
dir = "from-file"
every = 5
events = "1111"
include = '.*\.go$'
abort = true
command = ["sh", "-c", "exit 0"]
"#,
    );

    let args = CliArgsBuilder::new()
        .config(&path)
        .every(2)
        .abort(false)
        .build();
    let cfg = config::resolve(&args).unwrap();

    assert_eq!(cfg.root, std::path::PathBuf::from("from-file"));
    assert_eq!(cfg.every, Duration::from_secs(2));
    assert!(!cfg.abort_on_failure);
    assert_eq!(cfg.events, EventMask::ALL);
    assert_eq!(cfg.filter.include(), r".*\.go$");
    assert_eq!(cfg.command.display(), "sh -c exit 0");
}

#[test]
fn cli_command_replaces_the_file_command() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"command = ["sh", "-c", "exit 3"]"#);

    let args = CliArgsBuilder::new()
        .config(&path)
        .command(&["sh", "-c", "true"])
        .build();
    let merged = config::merged_options(&args).unwrap();

    assert_eq!(merged.command, vec!["sh", "-c", "true"]);
}

#[test]
fn zero_interval_is_rejected() {
    let args = CliArgsBuilder::new().every(0).command(&["sh"]).build();

    match config::resolve(&args) {
        Err(WatchrunError::ConfigError(msg)) => assert!(msg.contains("every")),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn bad_regex_is_rejected() {
    let args = CliArgsBuilder::new().exclude("(").command(&["sh"]).build();

    assert!(matches!(
        config::resolve(&args),
        Err(WatchrunError::InvalidPattern { kind: "exclude", .. })
    ));
}

#[test]
fn bad_mask_falls_back_to_default() {
    let args = CliArgsBuilder::new()
        .events("2")
        .command(&["sh"])
        .build();

    assert_eq!(config::resolve(&args).unwrap().events, EventMask::DEFAULT);
}

#[test]
fn unknown_program_is_rejected() {
    let args = CliArgsBuilder::new()
        .command(&["watchrun-definitely-not-a-real-program"])
        .build();

    assert!(matches!(
        config::resolve(&args),
        Err(WatchrunError::CommandNotFound { .. })
    ));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "recursive = true\n");

    assert!(matches!(
        config::load_from_path(&path),
        Err(WatchrunError::TomlError(_))
    ));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let args = CliArgsBuilder::new()
        .config(dir.path().join("nope.toml"))
        .command(&["sh"])
        .build();

    assert!(matches!(
        config::resolve(&args),
        Err(WatchrunError::IoError(_))
    ));
}

#[test]
fn empty_config_file_is_all_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    assert_eq!(config::load_from_path(&path).unwrap(), RawConfigFile::default());
}

#[test]
fn try_from_reports_a_missing_command() {
    assert!(matches!(
        WatchConfig::try_from(RawConfigFile::default()),
        Err(WatchrunError::ConfigError(_))
    ));
}

#[test]
fn single_dash_flags_are_normalized() {
    let argv = normalize_legacy_flags([
        "watchrun", "-dir", "src", "-every", "2", "-abort=false", "make", "-j4",
    ]);
    let expected: Vec<std::ffi::OsString> = [
        "watchrun",
        "--dir",
        "src",
        "--every",
        "2",
        "--abort=false",
        "make",
        "-j4",
    ]
    .iter()
    .map(Into::into)
    .collect();
    assert_eq!(argv, expected);

    let args = CliArgs::try_parse_from(argv).unwrap();
    assert_eq!(args.dir.as_deref(), Some("src"));
    assert_eq!(args.every, Some(2));
    assert_eq!(args.abort, Some(false));
    assert_eq!(args.command, vec!["make", "-j4"]);
}

#[test]
fn flag_values_that_look_like_flags_are_left_alone() {
    let argv = normalize_legacy_flags(["watchrun", "-exclude", "-draft", "echo", "hi"]);
    let args = CliArgs::try_parse_from(argv).unwrap();

    assert_eq!(args.exclude.as_deref(), Some("-draft"));
    assert_eq!(args.command, vec!["echo", "hi"]);
}

#[test]
fn everything_after_double_dash_belongs_to_the_command() {
    let argv = normalize_legacy_flags(["watchrun", "-abort", "--", "cargo", "-every"]);
    let args = CliArgs::try_parse_from(argv).unwrap();

    assert_eq!(args.abort, Some(true));
    assert_eq!(args.every, None);
    assert_eq!(args.command, vec!["cargo", "-every"]);
}

#[test]
fn help_flag_is_recognized_in_single_dash_form() {
    let argv = normalize_legacy_flags(["watchrun", "-help"]);
    let err = CliArgs::try_parse_from(argv).unwrap_err();

    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn command_is_optional_at_parse_time() {
    let args = CliArgs::try_parse_from(["watchrun", "--every", "3"]).unwrap();
    assert!(args.command.is_empty());
}

#[test]
fn log_level_priority() {
    assert_eq!(
        effective_level(Some(LogLevel::Debug), Some("error")),
        tracing::Level::DEBUG
    );
    assert_eq!(effective_level(None, Some(" WARN ")), tracing::Level::WARN);
    assert_eq!(effective_level(None, Some("bogus")), tracing::Level::INFO);
    assert_eq!(effective_level(None, None), tracing::Level::INFO);
}
