use chrono::{DateTime, Utc};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Capture clock for a monitoring session.
///
/// Wall-clock time is sampled once at construction; every later reading is
/// the anchor plus monotonic elapsed time, so capture times never go
/// backwards even if the system clock is stepped (which is likely when the
/// daemon being watched is disciplining it).
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    wall_anchor: f64,
    mono_anchor: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        let wall_anchor = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();

        Self {
            wall_anchor,
            mono_anchor: Instant::now(),
        }
    }

    /// Seconds since the Unix epoch.
    pub fn now(&self) -> f64 {
        self.wall_anchor + self.mono_anchor.elapsed().as_secs_f64()
    }

    pub fn started_at(&self) -> f64 {
        self.wall_anchor
    }
}

pub fn to_datetime(capture_time: f64) -> Option<DateTime<Utc>> {
    let secs = capture_time.floor();
    let nanos = ((capture_time - secs) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(secs as i64, nanos)
}

pub fn to_rfc3339(capture_time: f64) -> String {
    to_datetime(capture_time)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| format!("{capture_time:.6}"))
}

pub fn from_rfc3339(s: &str) -> Option<f64> {
    let dt = DateTime::parse_from_rfc3339(s).ok()?;
    Some(dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9)
}
