use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};

/// Echoes daemon lines without blocking the runtime.
///
/// The first write failure is logged and echo is switched off; the session
/// itself carries on.
#[derive(Debug)]
pub struct LineEcho<W> {
    out: W,
    failed: bool,
}

impl LineEcho<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> LineEcho<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub async fn line(&mut self, line: &str) {
        if self.failed {
            return;
        }
        let written = async {
            self.out.write_all(line.as_bytes()).await?;
            self.out.write_all(b"\n").await
        }
        .await;
        if let Err(e) = written {
            self.fail(e);
        }
    }

    pub async fn flush(&mut self) {
        if self.failed {
            return;
        }
        if let Err(e) = self.out.flush().await {
            self.fail(e);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn fail(&mut self, e: std::io::Error) {
        tracing::warn!(error = %e, "echo to stdout failed, echo disabled");
        self.failed = true;
    }
}
