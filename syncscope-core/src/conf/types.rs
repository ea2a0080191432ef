use crate::window::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Analyzer configuration, loaded once at startup and never mutated.
///
/// Every key is optional; unknown keys are ignored so that older JSON
/// configuration files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum readings retained in the window.
    pub window_capacity: usize,

    /// Analysis fires after this many new readings.
    pub trigger_count: usize,

    /// Analysis fires after this long without a count trigger.
    pub idle_timeout_secs: f64,

    /// Minimum sync-offset samples before a result is produced.
    pub min_samples: usize,

    /// Jitter warning threshold, ns.
    pub jitter_threshold: f64,

    /// Drift warning threshold, ns/s.
    pub drift_threshold: f64,

    /// Stability warning threshold, fraction in [0, 1].
    pub stability_threshold: f64,

    /// Time the daemon gets between SIGTERM and SIGKILL.
    pub shutdown_grace_secs: f64,

    pub performance_thresholds: GradeThresholds,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            window_capacity: DEFAULT_CAPACITY,
            trigger_count: 100,
            idle_timeout_secs: 30.0,
            min_samples: 10,
            jitter_threshold: 1000.0,
            drift_threshold: 100.0,
            stability_threshold: 0.95,
            shutdown_grace_secs: 5.0,
            performance_thresholds: GradeThresholds::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.idle_timeout_secs).unwrap_or(Duration::from_secs(30))
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::try_from_secs_f64(self.shutdown_grace_secs).unwrap_or(Duration::from_secs(5))
    }
}

/// Grade ceilings, best tier first. Anything above `fair` grades poor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub excellent: TierCeiling,
    pub good: TierCeiling,
    pub fair: TierCeiling,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            excellent: TierCeiling {
                jitter: 500.0,
                drift: 50.0,
            },
            good: TierCeiling {
                jitter: 1000.0,
                drift: 100.0,
            },
            fair: TierCeiling {
                jitter: 2000.0,
                drift: 200.0,
            },
        }
    }
}

/// Inclusive upper bounds for one grade tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCeiling {
    /// ns
    pub jitter: f64,
    /// ns/s, compared against the absolute drift rate
    pub drift: f64,
}

impl TierCeiling {
    pub fn admits(&self, jitter: f64, drift: f64) -> bool {
        jitter <= self.jitter && drift.abs() <= self.drift
    }
}
