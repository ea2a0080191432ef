use crate::analysis::PlotSeries;
use std::fmt::Write;

pub const SERIES_HEADER: &str = "elapsed_seconds,sync_offset,rolling_jitter,trend";

pub fn render_series(series: &PlotSeries) -> String {
    let mut out = String::with_capacity(48 * (series.points.len() + 1));
    out.push_str(SERIES_HEADER);
    out.push('\n');

    for p in &series.points {
        let _ = writeln!(
            out,
            "{:.6},{},{},{:.3}",
            p.elapsed_seconds,
            p.sync_offset,
            p.rolling_jitter
                .map(|j| format!("{j:.3}"))
                .unwrap_or_default(),
            p.trend,
        );
    }

    out
}
