use crate::analysis::stats::{least_squares, sample_std_dev};
use crate::reading::TimestampReading;
use serde::Serialize;

const MAX_ROLLING_WINDOW: usize = 100;
const MIN_ROLLING_WINDOW: usize = 5;

/// Plot-ready view of the sync offsets, for external renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub points: Vec<SeriesPoint>,
    /// Samples per rolling jitter value; `None` when too few samples.
    pub rolling_window: Option<usize>,
    /// Trend slope, ns/s.
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub elapsed_seconds: f64,
    pub sync_offset: f64,
    /// Standard deviation of the preceding `rolling_window` offsets.
    pub rolling_jitter: Option<f64>,
    pub trend: f64,
}

impl PlotSeries {
    pub fn from_readings(readings: &[TimestampReading]) -> Self {
        let (times, offsets): (Vec<f64>, Vec<f64>) = readings
            .iter()
            .filter_map(|r| r.sync_offset.map(|o| (r.capture_time, o)))
            .unzip();

        let t0 = times.first().copied().unwrap_or_default();
        let elapsed: Vec<f64> = times.iter().map(|t| t - t0).collect();

        let (slope, intercept) = least_squares(&elapsed, &offsets).unwrap_or((0.0, 0.0));

        let size = MAX_ROLLING_WINDOW.min(offsets.len() / 10);
        let rolling_window = (size > MIN_ROLLING_WINDOW).then_some(size);

        let points = elapsed
            .iter()
            .zip(&offsets)
            .enumerate()
            .map(|(i, (x, y))| SeriesPoint {
                elapsed_seconds: *x,
                sync_offset: *y,
                rolling_jitter: rolling_window
                    .filter(|w| i >= *w)
                    .map(|w| sample_std_dev(&offsets[i - w..i])),
                trend: slope * x + intercept,
            })
            .collect();

        Self {
            points,
            rolling_window,
            slope,
            intercept,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
