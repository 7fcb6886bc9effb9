// src/exec/command.rs

use std::fmt;
use std::future::Future;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{Result, RunError, WatchrunError};
use crate::exec::backend::{CommandRunner, RunReport};

/// The command to run, with its program already resolved on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    argv: Vec<String>,
    program: PathBuf,
}

impl CommandSpec {
    /// Resolve `argv[0]` against the executable search path.
    ///
    /// Resolution happens once, at startup; an unknown program is a
    /// configuration error and watching never begins.
    pub fn resolve(argv: Vec<String>) -> Result<Self> {
        let Some(name) = argv.first() else {
            return Err(WatchrunError::ConfigError(
                "no command given to run".to_string(),
            ));
        };

        let program = which::which(name).map_err(|source| WatchrunError::CommandNotFound {
            program: name.clone(),
            source,
        })?;

        debug!(command = %name, resolved = ?program, "resolved command on PATH");
        Ok(Self { argv, program })
    }

    /// Build a spec from an already resolved program path.
    pub fn with_program(argv: Vec<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            argv,
            program: program.into(),
        }
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }

    /// Command line for log messages.
    pub fn display(&self) -> String {
        self.argv.join(" ")
    }
}

/// Runs a [`CommandSpec`] as a child process.
///
/// Stdout and stderr are captured into one buffer in the order they arrive
/// and then relayed to `sink` (the process's own stdout by default).
pub struct ProcessRunner {
    spec: CommandSpec,
    sink: Box<dyn Write + Send>,
}

impl fmt::Debug for ProcessRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessRunner")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl ProcessRunner {
    pub fn new(spec: CommandSpec) -> Self {
        Self::with_sink(spec, Box::new(io::stdout()))
    }

    /// Relay output to `sink` instead of stdout.
    pub fn with_sink(spec: CommandSpec, sink: Box<dyn Write + Send>) -> Self {
        Self { spec, sink }
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    async fn run_inner(&mut self) -> RunReport {
        let started = Instant::now();
        info!(cmd = %self.spec.display(), "starting command");

        let mut cmd = Command::new(&self.spec.program);
        cmd.args(self.spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(source) => {
                return RunReport::failure(
                    RunError::Launch {
                        program: self.spec.program.clone(),
                        source,
                    },
                    Vec::new(),
                );
            }
        };

        let output = collect_combined(child.stdout.take(), child.stderr.take()).await;
        self.relay(&output);

        let status = match child.wait().await {
            Ok(status) => status,
            Err(source) => {
                return RunReport::failure(
                    RunError::Wait {
                        program: self.spec.program.clone(),
                        source,
                    },
                    output,
                );
            }
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            cmd = %self.spec.display(),
            exit_code = status.code(),
            success = status.success(),
            elapsed_ms,
            "command finished"
        );

        let result = if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(RunError::Exit { code }),
                None => Err(RunError::Signaled),
            }
        };

        RunReport { output, result }
    }

    /// Write captured output to the sink. Failures are logged, never fatal.
    fn relay(&mut self, output: &[u8]) {
        if output.is_empty() {
            return;
        }
        if let Err(err) = self.sink.write_all(output).and_then(|_| self.sink.flush()) {
            warn!(error = %err, "failed to relay command output");
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&mut self) -> Pin<Box<dyn Future<Output = RunReport> + Send + '_>> {
        Box::pin(self.run_inner())
    }
}

/// Drain both pipes concurrently into one buffer, in arrival order.
///
/// A read error ends capture for that pipe only.
async fn collect_combined<O, E>(mut stdout: Option<O>, mut stderr: Option<E>) -> Vec<u8>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
{
    let mut combined = Vec::new();
    let mut out_buf = [0u8; 8192];
    let mut err_buf = [0u8; 8192];

    while stdout.is_some() || stderr.is_some() {
        tokio::select! {
            res = read_chunk(stdout.as_mut(), &mut out_buf), if stdout.is_some() => {
                match res {
                    Ok(0) => stdout = None,
                    Ok(n) => combined.extend_from_slice(&out_buf[..n]),
                    Err(err) => {
                        warn!(error = %err, "failed reading command stdout");
                        stdout = None;
                    }
                }
            }
            res = read_chunk(stderr.as_mut(), &mut err_buf), if stderr.is_some() => {
                match res {
                    Ok(0) => stderr = None,
                    Ok(n) => combined.extend_from_slice(&err_buf[..n]),
                    Err(err) => {
                        warn!(error = %err, "failed reading command stderr");
                        stderr = None;
                    }
                }
            }
        }
    }

    combined
}

async fn read_chunk<R: AsyncRead + Unpin>(reader: Option<&mut R>, buf: &mut [u8]) -> io::Result<usize> {
    match reader {
        Some(reader) => reader.read(buf).await,
        None => std::future::pending().await,
    }
}
