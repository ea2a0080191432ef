use crate::analysis::grade::PerformanceGrade;
use crate::reading::MessageType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of synchronization quality over one window generation.
///
/// Built from scratch on every analysis pass and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub duration_seconds: f64,
    pub total_samples: usize,
    /// ns
    pub mean_sync_offset: f64,
    /// Sample standard deviation, ns.
    pub sync_jitter: f64,
    /// ns
    pub max_sync_deviation: f64,
    /// ns/s
    pub drift_rate: f64,
    pub stability_metric: f64,
    /// Share of the whole window flagged as hardware timestamped.
    pub hardware_timestamp_ratio: f64,
    pub message_stats: BTreeMap<MessageType, usize>,
    pub performance_grade: PerformanceGrade,
}
