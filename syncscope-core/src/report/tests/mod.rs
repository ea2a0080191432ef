
use crate::reading::{MessageType, TimestampReading};

pub(super) fn sample_readings() -> Vec<TimestampReading> {
    let mut out = Vec::new();
    for i in 0..12 {
        out.push(TimestampReading {
            capture_time: 1_700_000_000.0 + i as f64,
            sync_offset: Some(100.0 + i as f64 * 10.0),
            delay_offset: None,
            hardware_timestamp: Some(i % 3 == 0),
            message_type: MessageType::Sync,
            sequence_id: Some(i),
            rate_ratio: None,
        });
        if i % 4 == 0 {
            out.push(TimestampReading {
                capture_time: 1_700_000_000.5 + i as f64,
                sync_offset: None,
                delay_offset: Some(42.5),
                hardware_timestamp: None,
                message_type: MessageType::Delay,
                sequence_id: None,
                rate_ratio: Some(1.000001),
            });
        }
    }
    out
}
