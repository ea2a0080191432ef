use crate::conf::AnalyzerConfig;
use crate::pipeline::{
    ConsoleSummary, InputSource, PassReason, Pipeline, PipelineOptions, PipelineOutcome,
    SummarySink,
};
use anyhow::Result;
use std::sync::Arc;

/// Run one pipeline with Ctrl-C wired to its stop handle, then print the
/// final summary and where the reports went.
pub(crate) async fn run_session(
    config: AnalyzerConfig,
    source: InputSource,
    options: PipelineOptions,
    live: Arc<dyn SummarySink>,
) -> Result<PipelineOutcome> {
    let min_samples = config.min_samples;
    let pipeline = Pipeline::new(config, source, live).with_options(options);

    tracing::info!(session = %pipeline.metadata().session_id, "session started");

    let interrupt = tokio::spawn({
        let stop = pipeline.stop_handle();
        async move {
            if let Err(e) = stop.install_ctrl_c_handler().await {
                tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            }
        }
    });

    let outcome = pipeline.run().await;
    interrupt.abort();
    let outcome = outcome?;

    match &outcome.final_result {
        Some(result) => {
            print!(
                "{}",
                ConsoleSummary::detect().render(result, PassReason::Final)
            );
        }
        None => println!(
            "Insufficient data for analysis: {} readings, at least {min_samples} sync offsets required.",
            outcome.readings.len()
        ),
    }

    if let Some(reports) = &outcome.reports {
        println!("Report:  {}", reports.json.display());
        println!("CSV:     {}", reports.csv.display());
        println!("Summary: {}", reports.text.display());
        if let Some(series) = &reports.series {
            println!("Series:  {}", series.display());
        }
    }
    if let Some(raw) = &outcome.raw_log {
        println!("Raw log: {}", raw.display());
    }

    Ok(outcome)
}
