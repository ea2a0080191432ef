//! Daemon subprocess management.

use crate::pipeline::error::PipelineError;
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::{Child, ChildStderr, ChildStdout, Command};

/// Program and arguments of the synchronization daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl DaemonCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `argv[0]` followed by arguments; `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone()).args(args.iter().cloned()))
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A running daemon with both output streams captured.
pub struct DaemonProcess {
    pub child: Child,
    pub pid: Option<u32>,
    pub stdout: ChildStdout,
    pub stderr: ChildStderr,
}

pub fn spawn(cmd: &DaemonCommand) -> Result<DaemonProcess, PipelineError> {
    let spawn_err = |source| PipelineError::Spawn {
        command: cmd.display(),
        source,
    };

    let mut child = Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        // Own process group: a terminal Ctrl-C reaches only us, and the
        // daemon is stopped through SIGTERM.
        .process_group(0)
        .spawn()
        .map_err(spawn_err)?;

    let missing = || std::io::Error::other("child output was not captured");
    let stdout = child.stdout.take().ok_or_else(|| spawn_err(missing()))?;
    let stderr = child.stderr.take().ok_or_else(|| spawn_err(missing()))?;
    let pid = child.id();

    tracing::info!(command = %cmd.display(), pid, "daemon started");

    Ok(DaemonProcess {
        child,
        pid,
        stdout,
        stderr,
    })
}

/// How the daemon ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaemonExit {
    pub status: ExitStatus,
    /// We signaled the daemon before it exited.
    pub terminated: bool,
}

/// Ask the daemon to exit with SIGTERM, killing it after `grace`.
pub async fn terminate(child: &mut Child, grace: Duration) -> std::io::Result<DaemonExit> {
    if let Some(status) = child.try_wait()? {
        return Ok(DaemonExit {
            status,
            terminated: false,
        });
    }

    if let Some(pid) = child.id() {
        if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
            tracing::warn!(pid, error = %e, "failed to send SIGTERM to daemon");
        } else {
            tracing::debug!(pid, "SIGTERM sent to daemon");
        }
    }

    let status = match tokio::time::timeout(grace, child.wait()).await {
        Ok(status) => status?,
        Err(_) => {
            tracing::warn!(
                grace_ms = grace.as_millis() as u64,
                "daemon ignored SIGTERM, killing"
            );
            child.kill().await?;
            child.wait().await?
        }
    };

    Ok(DaemonExit {
        status,
        terminated: true,
    })
}

/// Wait for a daemon whose output already ended, bounded by `grace`.
pub async fn reap(child: &mut Child, grace: Duration) -> std::io::Result<DaemonExit> {
    match tokio::time::timeout(grace, child.wait()).await {
        Ok(status) => Ok(DaemonExit {
            status: status?,
            terminated: false,
        }),
        Err(_) => {
            tracing::warn!("daemon closed its output but kept running");
            terminate(child, grace).await
        }
    }
}
