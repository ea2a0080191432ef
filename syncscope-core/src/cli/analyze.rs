use crate::cli::session::run_session;
use crate::cli::{Overrides, build_runtime, resolve_config};
use crate::pipeline::{InputSource, PipelineOptions, QuietSummary};
use crate::report::ReportSink;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Captured daemon log, `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Analyzer config file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report path prefix
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write <prefix>_series.csv for plotting
    #[arg(long, requires = "output")]
    pub series: bool,

    /// Readings kept in the analysis window
    #[arg(long)]
    pub window: Option<usize>,
}

/// Replay a captured log through the parser and analysis engine.
pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = resolve_config(
        args.config.as_deref(),
        Overrides {
            window: args.window,
            ..Overrides::default()
        },
    )?;

    let options = PipelineOptions {
        reports: args
            .output
            .map(|prefix| ReportSink::new(prefix).with_series(args.series)),
        ..PipelineOptions::default()
    };

    let runtime = build_runtime()?;
    runtime.block_on(async {
        let source = InputSource::open(&args.input).await?;
        run_session(cfg, source, options, Arc::new(QuietSummary)).await
    })?;

    Ok(())
}
