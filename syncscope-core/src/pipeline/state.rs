use serde::Serialize;
use std::fmt;
use tokio::sync::watch;

/// Pipeline lifecycle. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineState {
    Idle,
    Running,
    Stopping,
    Stopped,
}

impl PipelineState {
    fn can_move_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        matches!(
            (self, next),
            (Idle, Running) | (Idle, Stopped) | (Running, Stopping) | (Stopping, Stopped)
        )
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PipelineState::Idle => "idle",
            PipelineState::Running => "running",
            PipelineState::Stopping => "stopping",
            PipelineState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid pipeline transition {from} -> {to}")]
pub struct StateError {
    pub from: PipelineState,
    pub to: PipelineState,
}

/// Observable state cell.
#[derive(Debug)]
pub struct StateMachine {
    tx: watch::Sender<PipelineState>,
}

impl StateMachine {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(PipelineState::Idle);
        Self { tx }
    }

    pub fn current(&self) -> PipelineState {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.tx.subscribe()
    }

    pub fn transition(&self, to: PipelineState) -> Result<(), StateError> {
        let mut result = Ok(());
        self.tx.send_if_modified(|state| {
            if state.can_move_to(to) {
                tracing::info!(from = %state, to = %to, "pipeline state changed");
                *state = to;
                true
            } else {
                result = Err(StateError { from: *state, to });
                false
            }
        });
        result
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
