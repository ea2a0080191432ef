mod grade_tests;

use crate::reading::{MessageType, TimestampReading};

pub(super) fn sync_at(t: f64, offset: f64) -> TimestampReading {
    TimestampReading {
        capture_time: t,
        sync_offset: Some(offset),
        delay_offset: None,
        hardware_timestamp: None,
        message_type: MessageType::Sync,
        sequence_id: None,
        rate_ratio: None,
    }
}

pub(super) fn delay_at(t: f64, offset: f64) -> TimestampReading {
    TimestampReading {
        capture_time: t,
        sync_offset: None,
        delay_offset: Some(offset),
        hardware_timestamp: None,
        message_type: MessageType::Delay,
        sequence_id: None,
        rate_ratio: None,
    }
}
