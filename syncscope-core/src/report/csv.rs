use crate::reading::TimestampReading;
use std::fmt::Write;

pub const CSV_HEADER: &str = "capture_time,sync_offset,delay_offset,hardware_ts,message_type";

/// One row per reading; absent values are empty cells.
pub fn render_csv(readings: &[TimestampReading]) -> String {
    let mut out = String::with_capacity(64 * (readings.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for r in readings {
        let _ = writeln!(
            out,
            "{:.6},{},{},{},{}",
            r.capture_time,
            opt(r.sync_offset),
            opt(r.delay_offset),
            opt(r.hardware_timestamp),
            r.message_type,
        );
    }

    out
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
