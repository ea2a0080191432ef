//! Synchronization quality analysis.
//!
//! Everything here is a pure function of a window snapshot and the
//! configuration; results are recomputed from scratch on every pass.

mod engine;
mod grade;
mod result;
mod series;
mod stats;

#[cfg(test)]
mod tests;

pub use engine::{STABILITY_FLOOR_NS, analyze, threshold_breaches};
pub use grade::PerformanceGrade;
pub use result::AnalysisResult;
pub use series::{PlotSeries, SeriesPoint};
