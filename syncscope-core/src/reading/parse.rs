use crate::reading::clock::{SessionClock, from_rfc3339};
use crate::reading::types::{MessageType, TimestampReading};
use once_cell::sync::Lazy;
use regex::Regex;

//-----------------------------------------------------------------------------
// Pattern table
//-----------------------------------------------------------------------------

static SYNC_OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"sync message.*offset\s*[=:]\s*([+-]?\d+(?:\.\d+)?)").expect("sync regex is valid")
});
static DELAY_OFFSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"delay.*offset\s*[=:]\s*([+-]?\d+(?:\.\d+)?)").expect("delay regex is valid")
});
static HARDWARE_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hardware.*timestamp|hw.*ts").expect("hardware regex is valid"));
static SOFTWARE_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"software.*timestamp|sw.*ts").expect("software regex is valid"));
static SEQUENCE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"sequence\s*[=:]\s*(\d+)").expect("sequence regex is valid"));
static RATE_RATIO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rate.*ratio\s*[=:]\s*([+-]?\d+(?:\.\d+)?)").expect("rate ratio regex is valid")
});

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

//-----------------------------------------------------------------------------
// Field extractors (each one independent, absent on any failure)
//-----------------------------------------------------------------------------

fn extract_offset(line: &str) -> Option<(MessageType, f64)> {
    if let Some(v) = capture(&SYNC_OFFSET, line).and_then(finite) {
        return Some((MessageType::Sync, v));
    }
    capture(&DELAY_OFFSET, line)
        .and_then(finite)
        .map(|v| (MessageType::Delay, v))
}

fn extract_hardware_hint(line: &str) -> Option<bool> {
    if HARDWARE_HINT.is_match(line) {
        Some(true)
    } else if SOFTWARE_HINT.is_match(line) {
        Some(false)
    } else {
        None
    }
}

fn extract_sequence_id(line: &str) -> Option<u64> {
    capture(&SEQUENCE_ID, line).and_then(|s| s.parse::<u64>().ok())
}

fn extract_rate_ratio(line: &str) -> Option<f64> {
    capture(&RATE_RATIO, line).and_then(finite)
}

//-----------------------------------------------------------------------------
// Parsing
//-----------------------------------------------------------------------------

/// Parse one daemon line observed at `capture_time`.
///
/// Returns `None` unless a sync or delay offset is present. A line carrying
/// both is a sync reading.
pub fn parse_at(line: &str, capture_time: f64) -> Option<TimestampReading> {
    let (message_type, value) = extract_offset(line)?;

    let (sync_offset, delay_offset) = match message_type {
        MessageType::Sync => (Some(value), None),
        _ => (None, Some(value)),
    };

    Some(TimestampReading {
        capture_time,
        sync_offset,
        delay_offset,
        hardware_timestamp: extract_hardware_hint(line),
        message_type,
        sequence_id: extract_sequence_id(line),
        rate_ratio: extract_rate_ratio(line),
    })
}

/// Splits the `<rfc3339>: ` prefix written by the raw line log.
///
/// Lines without a parsable prefix come back unchanged with no time.
pub fn split_capture_prefix(line: &str) -> (Option<f64>, &str) {
    match line.split_once(": ") {
        Some((head, rest)) => match from_rfc3339(head) {
            Some(t) => (Some(t), rest),
            None => (None, line),
        },
        None => (None, line),
    }
}

/// Line parser stamping readings from a session clock.
#[derive(Debug, Clone, Copy)]
pub struct ReadingParser {
    clock: SessionClock,
}

impl ReadingParser {
    pub fn new(clock: SessionClock) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    pub fn parse(&self, line: &str) -> Option<TimestampReading> {
        parse_at(line, self.clock.now())
    }

    /// Parse a replayed line, preferring its recorded capture time.
    pub fn parse_replayed(&self, line: &str) -> Option<TimestampReading> {
        match split_capture_prefix(line) {
            (Some(t), rest) => parse_at(rest, t),
            (None, rest) => self.parse(rest),
        }
    }
}
