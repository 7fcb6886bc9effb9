#![allow(dead_code)]

use std::path::PathBuf;

use notify::event::{
    AccessKind, CreateKind, DataChange, MetadataKind, ModifyKind, RemoveKind, RenameMode,
};
use notify::{Event, EventKind};

use watchrun::cli::CliArgs;

/// Builders for raw `notify` events, one per kind a backend commonly reports.
pub struct EventBuilder;

impl EventBuilder {
    pub fn create(path: &str) -> Event {
        Self::of(EventKind::Create(CreateKind::File), path)
    }

    pub fn write(path: &str) -> Event {
        Self::of(EventKind::Modify(ModifyKind::Data(DataChange::Content)), path)
    }

    pub fn remove(path: &str) -> Event {
        Self::of(EventKind::Remove(RemoveKind::File), path)
    }

    pub fn rename(from: &str, to: &str) -> Event {
        Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
            .add_path(PathBuf::from(from))
            .add_path(PathBuf::from(to))
    }

    pub fn chmod(path: &str) -> Event {
        Self::of(
            EventKind::Modify(ModifyKind::Metadata(MetadataKind::Permissions)),
            path,
        )
    }

    pub fn access(path: &str) -> Event {
        Self::of(EventKind::Access(AccessKind::Read), path)
    }

    pub fn of(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }
}

/// Builder for `CliArgs` to simplify test setup.
#[derive(Default)]
pub struct CliArgsBuilder {
    args: CliArgs,
}

impl CliArgsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, argv: &[&str]) -> Self {
        self.args.command = argv.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn dir(mut self, dir: &str) -> Self {
        self.args.dir = Some(dir.to_string());
        self
    }

    pub fn every(mut self, secs: u64) -> Self {
        self.args.every = Some(secs);
        self
    }

    pub fn events(mut self, bits: &str) -> Self {
        self.args.events = Some(bits.to_string());
        self
    }

    pub fn include(mut self, pattern: &str) -> Self {
        self.args.include = Some(pattern.to_string());
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.args.exclude = Some(pattern.to_string());
        self
    }

    pub fn abort(mut self, val: bool) -> Self {
        self.args.abort = Some(val);
        self
    }

    pub fn run_on_start(mut self, val: bool) -> Self {
        self.args.run_on_start = Some(val);
        self
    }

    pub fn config(mut self, path: impl Into<PathBuf>) -> Self {
        self.args.config = Some(path.into().to_string_lossy().into_owned());
        self
    }

    pub fn build(self) -> CliArgs {
        self.args
    }
}
