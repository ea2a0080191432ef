use crate::cli::session::run_session;
use crate::cli::{Overrides, build_runtime, resolve_config};
use crate::pipeline::{
    ConsoleSummary, DaemonCommand, InputSource, PipelineOptions, QuietSummary, SummarySink,
};
use crate::report::ReportSink;
use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Analyzer config file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report path prefix; writes <prefix>.json, <prefix>.csv and <prefix>.txt
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save every daemon line with its capture time
    #[arg(long)]
    pub log_output: Option<PathBuf>,

    /// Stop after this many seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Also write <prefix>_series.csv for plotting
    #[arg(long, requires = "output")]
    pub series: bool,

    /// Do not echo daemon output
    #[arg(long)]
    pub no_echo: bool,

    /// Only print the final summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Analyze after this many new readings
    #[arg(long)]
    pub trigger_count: Option<usize>,

    /// Readings kept in the analysis window
    #[arg(long)]
    pub window: Option<usize>,

    /// Analyze after this many seconds without new readings
    #[arg(long)]
    pub idle_timeout: Option<f64>,

    /// Daemon command and its arguments
    #[arg(last = true, default_value = "gptp")]
    pub daemon: Vec<String>,
}

/// Monitor a live daemon until it exits, Ctrl-C, or the duration elapses.
pub fn run(args: RunArgs) -> Result<()> {
    let cfg = resolve_config(
        args.config.as_deref(),
        Overrides {
            trigger_count: args.trigger_count,
            window: args.window,
            idle_timeout: args.idle_timeout,
        },
    )?;

    let command = DaemonCommand::from_argv(&args.daemon).context("no daemon command given")?;

    let max_duration = match args.duration {
        Some(secs) => Some(
            Duration::try_from_secs_f64(secs)
                .with_context(|| format!("invalid duration: {secs}"))?,
        ),
        None => None,
    };
    if max_duration.is_some_and(|d| d.is_zero()) {
        bail!("duration must be greater than 0");
    }

    let options = PipelineOptions {
        echo: !args.no_echo,
        raw_log: args.log_output,
        reports: args
            .output
            .map(|prefix| ReportSink::new(prefix).with_series(args.series)),
        max_duration,
    };

    let live: Arc<dyn SummarySink> = if args.quiet {
        Arc::new(QuietSummary)
    } else {
        Arc::new(ConsoleSummary::detect())
    };

    tracing::info!(command = %command.display(), "monitoring daemon");

    let runtime = build_runtime()?;
    runtime.block_on(run_session(cfg, InputSource::Daemon(command), options, live))?;

    Ok(())
}
