use crate::pipeline::context::PipelineContext;
use crate::pipeline::error::PipelineError;
use crate::pipeline::lines::LineStream;
use crate::pipeline::raw_log::RawLineLog;
use crate::pipeline::echo::LineEcho;
use crate::reading::{parse_at, split_capture_prefix};
use serde::Serialize;
use tokio::io::{AsyncRead, Stdout};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ReaderOptions {
    /// Print every line to stdout as it arrives.
    pub echo: bool,
    /// Take capture times from `<rfc3339>: ` line prefixes when present.
    pub replay: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReaderExit {
    EndOfStream,
    Stopped,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReaderStats {
    pub lines: u64,
    pub readings: u64,
}

/// Consume both streams line by line until they end or a stop is signaled.
///
/// Parse misses are counted as lines only. Every `trigger_count` stored
/// readings fire the analysis trigger.
pub(crate) async fn read_lines<A, B>(
    ctx: &PipelineContext,
    primary: LineStream<A>,
    secondary: Option<LineStream<B>>,
    raw_log: &mut Option<RawLineLog>,
    opts: ReaderOptions,
    stats: &mut ReaderStats,
) -> Result<ReaderExit, PipelineError>
where
    A: AsyncRead + Unpin,
    B: AsyncRead + Unpin,
{
    let mut echo = opts.echo.then(LineEcho::stdout);

    let exit = read_loop(ctx, primary, secondary, raw_log, opts, stats, &mut echo).await;

    if let Some(echo) = echo.as_mut() {
        echo.flush().await;
    }
    exit
}

async fn read_loop<A, B>(
    ctx: &PipelineContext,
    primary: LineStream<A>,
    secondary: Option<LineStream<B>>,
    raw_log: &mut Option<RawLineLog>,
    opts: ReaderOptions,
    stats: &mut ReaderStats,
    echo: &mut Option<LineEcho<Stdout>>,
) -> Result<ReaderExit, PipelineError>
where
    A: AsyncRead + Unpin,
    B: AsyncRead + Unpin,
{
    let mut stop = ctx.stop.signal();
    let mut primary = Some(primary);
    let mut secondary = secondary;
    let mut since_trigger = 0usize;

    loop {
        if primary.is_none() && secondary.is_none() {
            return Ok(ReaderExit::EndOfStream);
        }

        let (from_primary, next) = tokio::select! {
            biased;
            _ = stop.wait() => return Ok(ReaderExit::Stopped),
            line = next_from(&mut primary) => (true, line),
            line = next_from(&mut secondary) => (false, line),
        };

        let line = match next {
            Ok(Some(line)) => line,
            Ok(None) => {
                if from_primary {
                    primary = None;
                } else {
                    secondary = None;
                }
                continue;
            }
            Err(source) => return Err(PipelineError::Stream { source }),
        };

        stats.lines += 1;

        // Replayed lines keep their recorded capture time, and the raw log
        // gets the line without its old prefix.
        let (capture_time, body) = if opts.replay {
            match split_capture_prefix(&line) {
                (Some(t), rest) => (t, rest),
                (None, rest) => (ctx.parser.clock().now(), rest),
            }
        } else {
            (ctx.parser.clock().now(), line.as_str())
        };

        if let Some(log) = raw_log.as_mut() {
            log.record(capture_time, body);
        }

        if let Some(echo) = echo.as_mut() {
            echo.line(&line).await;
        }

        let Some(reading) = parse_at(body, capture_time) else {
            continue;
        };

        ctx.window.append(reading);
        stats.readings += 1;
        since_trigger += 1;

        if since_trigger >= ctx.config.trigger_count {
            since_trigger = 0;
            ctx.trigger.fire();
        }
    }
}

async fn next_from<R: AsyncRead + Unpin>(
    stream: &mut Option<LineStream<R>>,
) -> std::io::Result<Option<String>> {
    match stream {
        Some(s) => s.next_line().await,
        None => std::future::pending().await,
    }
}
