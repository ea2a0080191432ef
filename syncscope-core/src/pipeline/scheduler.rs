use crate::analysis::{AnalysisResult, analyze, threshold_breaches};
use crate::pipeline::context::PipelineContext;
use crate::pipeline::sink::PassReason;
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// Wait for a count trigger or the idle timeout, whichever comes first, and
/// run one analysis pass. Exits when a stop is signaled.
pub(crate) async fn run_scheduler(ctx: Arc<PipelineContext>) {
    let mut stop = ctx.stop.signal();
    let idle = ctx.config.idle_timeout();

    tracing::debug!(
        trigger_count = ctx.config.trigger_count,
        idle_ms = idle.as_millis() as u64,
        "analysis scheduler started"
    );

    loop {
        let reason = tokio::select! {
            biased;
            _ = stop.wait() => break,
            _ = ctx.trigger.notified() => PassReason::Count,
            _ = tokio::time::sleep(idle) => PassReason::Idle,
        };

        run_pass(&ctx, reason);
    }

    tracing::debug!("analysis scheduler stopped");
}

/// One analysis pass over a fresh snapshot.
///
/// Returns `None` when another pass holds the slot or data is insufficient.
/// Live results go to the summary sink; the final one is left to the caller.
pub(crate) fn run_pass(ctx: &PipelineContext, reason: PassReason) -> Option<AnalysisResult> {
    let Some(_guard) = ctx.trigger.begin() else {
        tracing::debug!(%reason, "analysis already in flight, pass skipped");
        return None;
    };

    ctx.passes.fetch_add(1, Ordering::Relaxed);

    let snapshot = ctx.window.snapshot();
    let Some(result) = analyze(&snapshot, &ctx.config) else {
        tracing::debug!(%reason, readings = snapshot.len(), "no analysis result yet");
        return None;
    };

    tracing::info!(
        %reason,
        samples = result.total_samples,
        mean_ns = result.mean_sync_offset,
        jitter_ns = result.sync_jitter,
        drift_ns_per_s = result.drift_rate,
        stability = result.stability_metric,
        grade = %result.performance_grade,
        "analysis pass complete"
    );

    for breach in threshold_breaches(&result, &ctx.config) {
        tracing::warn!(%reason, "{breach}");
    }

    ctx.latest.store(Some(Arc::new(result.clone())));

    if reason != PassReason::Final {
        ctx.sink.publish(&result, reason);
    }

    Some(result)
}
