use serde::Serialize;
use std::fmt;
use tokio::sync::watch;

/// Why the pipeline left `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndOfStream,
    Requested,
    DurationElapsed,
    StreamFailure,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::EndOfStream => "end of stream",
            StopReason::Requested => "stop requested",
            StopReason::DurationElapsed => "duration elapsed",
            StopReason::StreamFailure => "stream failure",
        };
        f.write_str(s)
    }
}

/// Cooperative stop flag shared by every pipeline activity.
///
/// The first reason recorded wins; later requests are ignored.
#[derive(Clone, Debug)]
pub struct StopHandle {
    tx: watch::Sender<Option<StopReason>>,
}

impl StopHandle {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    pub fn request(&self, reason: StopReason) {
        let changed = self.tx.send_if_modified(|current| {
            if current.is_none() {
                *current = Some(reason);
                true
            } else {
                false
            }
        });
        if changed {
            tracing::info!(%reason, "pipeline stop signaled");
        }
    }

    pub fn reason(&self) -> Option<StopReason> {
        *self.tx.borrow()
    }

    pub fn is_stopped(&self) -> bool {
        self.reason().is_some()
    }

    pub fn signal(&self) -> StopSignal {
        StopSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Request a stop on Ctrl-C.
    pub async fn install_ctrl_c_handler(&self) -> anyhow::Result<()> {
        tokio::signal::ctrl_c().await?;
        tracing::info!("interrupt received");
        self.request(StopReason::Requested);
        Ok(())
    }
}

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of a [`StopHandle`].
#[derive(Debug, Clone)]
pub struct StopSignal {
    rx: watch::Receiver<Option<StopReason>>,
}

impl StopSignal {
    /// Resolves once a stop has been requested, immediately if it already was.
    pub async fn wait(&mut self) {
        // A dropped handle can never signal again; treat it as a stop.
        let _ = self.rx.wait_for(Option::is_some).await;
    }

    pub fn is_stopped(&self) -> bool {
        self.rx.borrow().is_some()
    }
}
