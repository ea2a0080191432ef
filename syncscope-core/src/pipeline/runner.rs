use crate::analysis::AnalysisResult;
use crate::conf::AnalyzerConfig;
use crate::pipeline::context::PipelineContext;
use crate::pipeline::daemon::{self, DaemonCommand, DaemonExit};
use crate::pipeline::error::PipelineError;
use crate::pipeline::lines::LineStream;
use crate::pipeline::raw_log::RawLineLog;
use crate::pipeline::reader::{ReaderExit, ReaderOptions, ReaderStats, read_lines};
use crate::pipeline::scheduler::{run_pass, run_scheduler};
use crate::pipeline::sink::{PassReason, SummarySink};
use crate::pipeline::state::{PipelineState, StateMachine};
use crate::pipeline::stop::{StopHandle, StopReason};
use crate::pipeline::trigger::{AnalysisTrigger, TriggerStats};
use crate::pipeline::view::AnalyzerView;
use crate::reading::{ReadingParser, SessionClock, TimestampReading};
use crate::report::{ReportMetadata, ReportSink, WrittenReports};
use crate::window::ReadingWindow;
use arc_swap::ArcSwapOption;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio::process::Child;
use tokio::sync::watch;

type BoxedInput = Box<dyn AsyncRead + Send + Unpin>;

/// Where daemon lines come from.
pub enum InputSource {
    /// Spawn the daemon and read its stdout and stderr.
    Daemon(DaemonCommand),
    /// Replay previously captured lines. `<rfc3339>: ` prefixes, when
    /// present, supply the capture time.
    Replay(BoxedInput),
}

impl InputSource {
    pub fn replay<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        Self::Replay(Box::new(reader))
    }

    /// Replay a captured log file, or stdin for `-`.
    pub async fn open(path: &Path) -> Result<Self, PipelineError> {
        if path.as_os_str() == "-" {
            return Ok(Self::replay(tokio::io::stdin()));
        }

        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| PipelineError::Input {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::replay(file))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Echo every daemon line to stdout.
    pub echo: bool,
    /// Write every line, parsed or not, to this file.
    pub raw_log: Option<PathBuf>,
    /// Write end-of-session reports through this sink.
    pub reports: Option<ReportSink>,
    /// Stop after this long even if the daemon keeps running.
    pub max_duration: Option<Duration>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub lines: u64,
    pub readings: u64,
    pub passes: u64,
    pub trigger: TriggerStats,
}

/// Everything a finished session produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub stop_reason: StopReason,
    pub readings: Vec<TimestampReading>,
    pub final_result: Option<AnalysisResult>,
    pub reports: Option<WrittenReports>,
    pub raw_log: Option<PathBuf>,
    pub stats: PipelineStats,
}

/// One monitoring session: spawn, read, analyze on triggers, stop, flush.
///
/// A pipeline runs once. Its reader stays on the calling task while the
/// scheduler runs as a separate task; the two only share the window and
/// the trigger.
pub struct Pipeline {
    ctx: Arc<PipelineContext>,
    state: StateMachine,
    source: InputSource,
    options: PipelineOptions,
    meta: ReportMetadata,
}

impl Pipeline {
    pub fn new(config: AnalyzerConfig, source: InputSource, sink: Arc<dyn SummarySink>) -> Self {
        let clock = SessionClock::start();
        let meta = ReportMetadata::new(clock.started_at(), config.clone());

        let ctx = PipelineContext {
            window: Arc::new(ReadingWindow::new(config.window_capacity)),
            trigger: AnalysisTrigger::new(),
            latest: Arc::new(ArcSwapOption::empty()),
            sink,
            parser: ReadingParser::new(clock),
            stop: StopHandle::new(),
            passes: AtomicU64::new(0),
            config,
        };

        Self {
            ctx: Arc::new(ctx),
            state: StateMachine::new(),
            source,
            options: PipelineOptions::default(),
            meta,
        }
    }

    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.ctx.stop.clone()
    }

    pub fn view(&self) -> AnalyzerView {
        AnalyzerView::new(self.ctx.window.clone(), self.ctx.latest.clone())
    }

    pub fn state(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    pub fn metadata(&self) -> &ReportMetadata {
        &self.meta
    }

    /// Run the session to completion.
    ///
    /// Reports and the raw log are flushed exactly once after the final
    /// pass, even when the session ends in an error; the first error is
    /// what gets returned.
    pub async fn run(self) -> Result<PipelineOutcome, PipelineError> {
        let Pipeline {
            ctx,
            state,
            source,
            options,
            meta,
        } = self;

        let mut raw_log = match options.raw_log.as_ref().map(RawLineLog::create).transpose() {
            Ok(log) => log,
            Err(e) => {
                state.transition(PipelineState::Stopped)?;
                return Err(e.into());
            }
        };

        let replay = matches!(source, InputSource::Replay(_));
        let (daemon, primary, secondary): (Option<(DaemonCommand, Child)>, BoxedInput, Option<BoxedInput>) =
            match source {
                InputSource::Daemon(cmd) => match daemon::spawn(&cmd) {
                    Ok(proc) => (
                        Some((cmd, proc.child)),
                        Box::new(proc.stdout) as BoxedInput,
                        Some(Box::new(proc.stderr) as BoxedInput),
                    ),
                    Err(e) => {
                        state.transition(PipelineState::Stopped)?;
                        return Err(e);
                    }
                },
                InputSource::Replay(reader) => (None, reader, None),
            };

        state.transition(PipelineState::Running)?;

        let scheduler = tokio::spawn(run_scheduler(ctx.clone()));
        let deadline = options.max_duration.map(|limit| {
            let stop = ctx.stop.clone();
            tokio::spawn(async move {
                let mut signal = stop.signal();
                tokio::select! {
                    _ = signal.wait() => {}
                    _ = tokio::time::sleep(limit) => stop.request(StopReason::DurationElapsed),
                }
            })
        });

        let reader_opts = ReaderOptions {
            echo: options.echo,
            replay,
        };
        let mut reader_stats = ReaderStats::default();
        let mut failure: Option<PipelineError> = None;

        match read_lines(
            &ctx,
            LineStream::new(primary),
            secondary.map(LineStream::new),
            &mut raw_log,
            reader_opts,
            &mut reader_stats,
        )
        .await
        {
            Ok(ReaderExit::EndOfStream) => ctx.stop.request(StopReason::EndOfStream),
            Ok(ReaderExit::Stopped) => {}
            Err(e) => {
                tracing::error!(error = %e, "line reader failed");
                ctx.stop.request(StopReason::StreamFailure);
                failure = Some(e);
            }
        }

        state.transition(PipelineState::Stopping)?;
        let stop_reason = ctx.stop.reason().unwrap_or(StopReason::EndOfStream);

        if let Some((cmd, mut child)) = daemon {
            let grace = ctx.config.shutdown_grace();
            let waited = if stop_reason == StopReason::EndOfStream {
                daemon::reap(&mut child, grace).await
            } else {
                daemon::terminate(&mut child, grace).await
            };
            if let Some(e) = check_exit(&cmd, stop_reason, waited) {
                failure.get_or_insert(e);
            }
        }

        if let Some(task) = deadline {
            task.abort();
        }
        if let Err(e) = scheduler.await {
            tracing::error!(error = %e, "analysis scheduler task failed");
            failure.get_or_insert(e.into());
        }

        let final_result = run_pass(&ctx, PassReason::Final);
        let readings = ctx.window.snapshot();
        state.transition(PipelineState::Stopped)?;

        let mut flush_error = None;

        let raw_log = raw_log.and_then(|log| match log.finish() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::error!(error = %e, "failed to write raw line log");
                flush_error.get_or_insert(e);
                None
            }
        });

        let reports = options.reports.as_ref().and_then(|sink| {
            match sink.write(&meta, &readings, final_result.as_ref()) {
                Ok(written) => Some(written),
                Err(e) => {
                    tracing::error!(error = %e, "failed to write reports");
                    flush_error.get_or_insert(e);
                    None
                }
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }
        if let Some(e) = flush_error {
            return Err(e.into());
        }

        let stats = PipelineStats {
            lines: reader_stats.lines,
            readings: reader_stats.readings,
            passes: ctx.passes.load(Ordering::Relaxed),
            trigger: ctx.trigger.stats(),
        };

        tracing::info!(
            reason = %stop_reason,
            lines = stats.lines,
            readings = stats.readings,
            passes = stats.passes,
            dropped_triggers = stats.trigger.dropped,
            "session finished"
        );

        Ok(PipelineOutcome {
            stop_reason,
            readings,
            final_result,
            reports,
            raw_log,
            stats,
        })
    }
}

/// A daemon that ends its own output and then exits with a failure status
/// crashed. One we signaled may exit however it likes.
fn check_exit(
    cmd: &DaemonCommand,
    reason: StopReason,
    waited: std::io::Result<DaemonExit>,
) -> Option<PipelineError> {
    match waited {
        Ok(DaemonExit { status, terminated })
            if reason == StopReason::EndOfStream && !terminated && !status.success() =>
        {
            tracing::error!(command = %cmd.display(), %status, "daemon exited unexpectedly");
            Some(PipelineError::DaemonCrashed {
                command: cmd.display(),
                status: status.to_string(),
            })
        }
        Ok(DaemonExit { status, terminated }) => {
            tracing::info!(command = %cmd.display(), %status, terminated, "daemon exited");
            None
        }
        Err(source) => {
            tracing::error!(command = %cmd.display(), error = %source, "failed to wait for daemon");
            Some(PipelineError::Stream { source })
        }
    }
}
