use crate::analysis::{AnalysisResult, PlotSeries};
use crate::reading::TimestampReading;
use crate::window::ReadingWindow;
use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Read-only view for collaborators such as plot renderers.
///
/// Hands out owned snapshots and shared immutable results; nothing mutable
/// escapes the pipeline.
#[derive(Clone, Debug)]
pub struct AnalyzerView {
    window: Arc<ReadingWindow>,
    latest: Arc<ArcSwapOption<AnalysisResult>>,
}

impl AnalyzerView {
    pub(crate) fn new(window: Arc<ReadingWindow>, latest: Arc<ArcSwapOption<AnalysisResult>>) -> Self {
        Self { window, latest }
    }

    pub fn readings(&self) -> Vec<TimestampReading> {
        self.window.snapshot()
    }

    pub fn latest_result(&self) -> Option<Arc<AnalysisResult>> {
        self.latest.load_full()
    }

    pub fn plot_series(&self) -> PlotSeries {
        PlotSeries::from_readings(&self.window.snapshot())
    }

    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}
