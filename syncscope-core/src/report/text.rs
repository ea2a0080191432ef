use crate::analysis::AnalysisResult;
use crate::reading::clock::to_rfc3339;
use crate::report::ReportMetadata;
use std::fmt::Write;

/// Labelled summary values shared by the console and the text report.
pub fn summary_lines(result: &AnalysisResult) -> Vec<(&'static str, String)> {
    vec![
        (
            "Duration",
            format!(
                "{:.1}s | Samples: {}",
                result.duration_seconds, result.total_samples
            ),
        ),
        (
            "Mean Sync Offset",
            format!("{:.1} ns", result.mean_sync_offset),
        ),
        ("Jitter (StdDev)", format!("{:.1} ns", result.sync_jitter)),
        (
            "Max Deviation",
            format!("{:.1} ns", result.max_sync_deviation),
        ),
        ("Drift Rate", format!("{:.2} ns/s", result.drift_rate)),
        (
            "Stability",
            format!("{:.1}%", result.stability_metric * 100.0),
        ),
        (
            "HW Timestamps",
            format!("{:.1}%", result.hardware_timestamp_ratio * 100.0),
        ),
        ("Messages", message_counts(result)),
        ("Performance", result.performance_grade.to_string()),
    ]
}

fn message_counts(result: &AnalysisResult) -> String {
    if result.message_stats.is_empty() {
        return "-".to_string();
    }
    result
        .message_stats
        .iter()
        .map(|(kind, count)| format!("{kind}={count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_text(
    meta: &ReportMetadata,
    window_size: usize,
    result: Option<&AnalysisResult>,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "TIMESTAMP ANALYSIS REPORT");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Session: {}", meta.session_id);
    let _ = writeln!(out, "Started: {}", to_rfc3339(meta.session_start));
    let _ = writeln!(out, "Generated: {}", chrono::Utc::now().to_rfc3339());
    let _ = writeln!(out, "Readings retained: {window_size}");
    let _ = writeln!(out);

    match result {
        Some(result) => {
            for (label, value) in summary_lines(result) {
                let _ = writeln!(out, "{label}: {value}");
            }
        }
        None => {
            let _ = writeln!(
                out,
                "Insufficient data: at least {} sync offset samples are required.",
                meta.config.min_samples
            );
        }
    }

    let _ = writeln!(out, "{rule}");
    out
}
