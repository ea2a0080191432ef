use crate::pipeline::state::StateError;
use crate::report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to start daemon `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("daemon output stream failed: {source}")]
    Stream {
        #[source]
        source: std::io::Error,
    },

    #[error("daemon `{command}` exited unexpectedly ({status})")]
    DaemonCrashed { command: String, status: String },

    #[error("failed to open input {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    State(#[from] StateError),

    #[error("analysis scheduler failed: {0}")]
    Scheduler(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
