use crate::conf::GradeThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal synchronization grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PerformanceGrade {
    /// First tier (excellent → good → fair) admitting both figures wins.
    pub fn classify(jitter: f64, drift_rate: f64, thresholds: &GradeThresholds) -> Self {
        let tiers = [
            (PerformanceGrade::Excellent, &thresholds.excellent),
            (PerformanceGrade::Good, &thresholds.good),
            (PerformanceGrade::Fair, &thresholds.fair),
        ];

        tiers
            .into_iter()
            .find(|(_, ceiling)| ceiling.admits(jitter, drift_rate))
            .map(|(grade, _)| grade)
            .unwrap_or(PerformanceGrade::Poor)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceGrade::Excellent => "Excellent",
            PerformanceGrade::Good => "Good",
            PerformanceGrade::Fair => "Fair",
            PerformanceGrade::Poor => "Poor",
        }
    }
}

impl fmt::Display for PerformanceGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
