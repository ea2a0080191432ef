use std::fmt::Write as _;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use syncscope_core::pipeline::DaemonCommand;
use tempfile::TempDir;

/// Shell script standing in for a sync daemon.
///
/// The script lives in its own temp dir, removed on drop.
pub struct FakeDaemon {
    dir: TempDir,
    body: String,
}

impl FakeDaemon {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir for fake daemon"),
            body: String::new(),
        }
    }

    /// One `sync message offset = N` line per offset on stdout.
    pub fn sync_offsets(mut self, offsets: &[i64]) -> Self {
        for (seq, offset) in offsets.iter().enumerate() {
            let _ = writeln!(
                self.body,
                "echo 'ptp4l[{seq}.000]: sync message offset = {offset} sequence = {seq} hardware timestamp'"
            );
        }
        self
    }

    pub fn stdout(mut self, line: &str) -> Self {
        let _ = writeln!(self.body, "echo '{line}'");
        self
    }

    pub fn stderr(mut self, line: &str) -> Self {
        let _ = writeln!(self.body, "echo '{line}' >&2");
        self
    }

    pub fn sleep(mut self, secs: f64) -> Self {
        let _ = writeln!(self.body, "sleep {secs}");
        self
    }

    /// Keep running until signaled.
    pub fn hang(mut self) -> Self {
        self.body.push_str("exec sleep 600\n");
        self
    }

    pub fn exit(mut self, code: i32) -> Self {
        let _ = writeln!(self.body, "exit {code}");
        self
    }

    /// Scratch directory for outputs belonging to this test.
    pub fn dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write the script and return a command that runs it.
    pub fn command(&self) -> DaemonCommand {
        let path = self.dir.path().join("fake-daemon.sh");
        fs::write(&path, format!("#!/bin/sh\n{}", self.body)).expect("write fake daemon");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake daemon");

        DaemonCommand::new(path.to_string_lossy().into_owned())
    }
}

impl Default for FakeDaemon {
    fn default() -> Self {
        Self::new()
    }
}
