use crate::analysis::grade::PerformanceGrade;
use crate::analysis::result::AnalysisResult;
use crate::analysis::stats::{least_squares, max_abs_deviation, mean, sample_std_dev};
use crate::conf::AnalyzerConfig;
use crate::reading::TimestampReading;
use std::collections::BTreeMap;

/// Floor for the stability band, ns. Independent of `jitter_threshold`.
pub const STABILITY_FLOOR_NS: f64 = 1000.0;

/// Analyze a window snapshot.
///
/// Offset statistics use only readings carrying a sync offset; hardware
/// ratio and message counts are taken over the whole snapshot. Returns
/// `None` while fewer than `min_samples` sync readings are available.
pub fn analyze(readings: &[TimestampReading], cfg: &AnalyzerConfig) -> Option<AnalysisResult> {
    let min_samples = cfg.min_samples.max(1);

    if readings.len() < min_samples {
        tracing::debug!(
            readings = readings.len(),
            min_samples,
            "insufficient readings for analysis"
        );
        return None;
    }

    let (times, offsets): (Vec<f64>, Vec<f64>) = readings
        .iter()
        .filter_map(|r| r.sync_offset.map(|o| (r.capture_time, o)))
        .unzip();

    if offsets.len() < min_samples {
        tracing::debug!(
            sync_samples = offsets.len(),
            min_samples,
            "insufficient sync offsets for analysis"
        );
        return None;
    }

    let t0 = times[0];
    let duration_seconds = times[times.len() - 1] - t0;

    let mean_sync_offset = mean(&offsets);
    let sync_jitter = sample_std_dev(&offsets);
    let max_sync_deviation = max_abs_deviation(&offsets, mean_sync_offset);

    let elapsed: Vec<f64> = times.iter().map(|t| t - t0).collect();
    let drift_rate = least_squares(&elapsed, &offsets)
        .map(|(slope, _)| slope)
        .unwrap_or(0.0);

    let stability_metric = stability(&offsets, mean_sync_offset, sync_jitter);

    let hardware = readings.iter().filter(|r| r.is_hardware()).count();
    let hardware_timestamp_ratio = hardware as f64 / readings.len() as f64;

    let mut message_stats = BTreeMap::new();
    for r in readings {
        *message_stats.entry(r.message_type).or_insert(0) += 1;
    }

    let performance_grade =
        PerformanceGrade::classify(sync_jitter, drift_rate, &cfg.performance_thresholds);

    Some(AnalysisResult {
        duration_seconds,
        total_samples: offsets.len(),
        mean_sync_offset,
        sync_jitter,
        max_sync_deviation,
        drift_rate,
        stability_metric,
        hardware_timestamp_ratio,
        message_stats,
        performance_grade,
    })
}

/// Fraction of offsets within `max(2 * jitter, floor)` of the mean.
fn stability(offsets: &[f64], mean: f64, jitter: f64) -> f64 {
    let threshold = if jitter > 0.0 {
        (2.0 * jitter).max(STABILITY_FLOOR_NS)
    } else {
        STABILITY_FLOOR_NS
    };

    let stable = offsets
        .iter()
        .filter(|x| (*x - mean).abs() <= threshold)
        .count();
    stable as f64 / offsets.len() as f64
}

/// Threshold breaches worth a warning after a live pass.
pub fn threshold_breaches(result: &AnalysisResult, cfg: &AnalyzerConfig) -> Vec<String> {
    let mut out = Vec::new();

    if result.sync_jitter > cfg.jitter_threshold {
        out.push(format!(
            "jitter {:.1} ns exceeds {:.1} ns",
            result.sync_jitter, cfg.jitter_threshold
        ));
    }
    if result.drift_rate.abs() > cfg.drift_threshold {
        out.push(format!(
            "drift {:.2} ns/s exceeds {:.2} ns/s",
            result.drift_rate, cfg.drift_threshold
        ));
    }
    if result.stability_metric < cfg.stability_threshold {
        out.push(format!(
            "stability {:.1}% below {:.1}%",
            result.stability_metric * 100.0,
            cfg.stability_threshold * 100.0
        ));
    }

    out
}
