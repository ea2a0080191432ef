use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of daemon message a reading was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Sync,
    Delay,
    Unknown,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Sync => "sync",
            MessageType::Delay => "delay",
            MessageType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed observation from the daemon's output.
///
/// Readings are never mutated after construction. The window and every
/// snapshot hold clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampReading {
    /// Seconds since the Unix epoch at which the line was observed.
    pub capture_time: f64,

    /// Nanoseconds, populated for sync-type lines.
    pub sync_offset: Option<f64>,

    /// Nanoseconds, populated for delay-type lines.
    pub delay_offset: Option<f64>,

    /// `Some(true)` for hardware timestamping hints, `Some(false)` for software,
    /// `None` when the line says neither.
    pub hardware_timestamp: Option<bool>,

    pub message_type: MessageType,

    /// Order hint only.
    pub sequence_id: Option<u64>,

    pub rate_ratio: Option<f64>,
}

impl TimestampReading {
    pub fn is_hardware(&self) -> bool {
        self.hardware_timestamp == Some(true)
    }
}
