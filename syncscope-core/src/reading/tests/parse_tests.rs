use crate::reading::{MessageType, ReadingParser, SessionClock, parse_at, split_capture_prefix};
use pretty_assertions::assert_eq;

const T: f64 = 1_700_000_000.0;

#[test]
fn sync_line_yields_sync_reading() {
    let r = parse_at("sync message: offset = 100 ns, sequence = 1", T).unwrap();

    assert_eq!(r.message_type, MessageType::Sync);
    assert_eq!(r.sync_offset, Some(100.0));
    assert_eq!(r.delay_offset, None);
    assert_eq!(r.sequence_id, Some(1));
    assert_eq!(r.hardware_timestamp, None);
    assert_eq!(r.capture_time, T);
}

#[test]
fn sync_offset_accepts_sign_and_fraction() {
    let r = parse_at("sync message received, offset: -12.5", T).unwrap();
    assert_eq!(r.sync_offset, Some(-12.5));

    let r = parse_at("sync message offset=+42", T).unwrap();
    assert_eq!(r.sync_offset, Some(42.0));
}

#[test]
fn delay_line_yields_delay_reading() {
    let r = parse_at("path delay measured, offset = 340", T).unwrap();

    assert_eq!(r.message_type, MessageType::Delay);
    assert_eq!(r.delay_offset, Some(340.0));
    assert_eq!(r.sync_offset, None);
}

#[test]
fn line_matching_both_patterns_is_sync() {
    let r = parse_at("sync message after delay request, offset = 5", T).unwrap();

    assert_eq!(r.message_type, MessageType::Sync);
    assert_eq!(r.sync_offset, Some(5.0));
    assert_eq!(r.delay_offset, None);
}

#[test]
fn lines_without_offsets_are_dropped() {
    assert!(parse_at("port 1: announce message received", T).is_none());
    assert!(parse_at("offset = 100", T).is_none());
    assert!(parse_at("sync message without any number", T).is_none());
    assert!(parse_at("", T).is_none());
}

#[test]
fn hardware_hint_is_tri_state() {
    let hw = parse_at("sync message offset = 10 using hardware timestamp", T).unwrap();
    assert_eq!(hw.hardware_timestamp, Some(true));

    let sw = parse_at("sync message offset = 10 using software timestamp", T).unwrap();
    assert_eq!(sw.hardware_timestamp, Some(false));

    let unknown = parse_at("sync message offset = 10", T).unwrap();
    assert_eq!(unknown.hardware_timestamp, None);
}

#[test]
fn hint_and_extras_apply_to_delay_readings_too() {
    let r = parse_at(
        "hw ts: delay response offset = 80, sequence = 7, rate ratio = 1.0000012",
        T,
    )
    .unwrap();

    assert_eq!(r.message_type, MessageType::Delay);
    assert_eq!(r.hardware_timestamp, Some(true));
    assert_eq!(r.sequence_id, Some(7));
    assert_eq!(r.rate_ratio, Some(1.0000012));
}

#[test]
fn malformed_sequence_id_is_absent_not_fatal() {
    let r = parse_at(
        "sync message offset = 3, sequence = 99999999999999999999999999",
        T,
    )
    .unwrap();

    assert_eq!(r.sync_offset, Some(3.0));
    assert_eq!(r.sequence_id, None);
}

#[test]
fn non_finite_offset_is_treated_as_no_match() {
    let huge = format!("sync message offset = 1{}", "0".repeat(400));
    assert!(parse_at(&huge, T).is_none());
}

#[test]
fn capture_prefix_is_split_from_replayed_lines() {
    let (t, rest) = split_capture_prefix("2026-10-16T10:00:00.500+00:00: sync message offset = 5");

    assert_eq!(rest, "sync message offset = 5");
    let t = t.unwrap();
    assert!((t - 1_792_144_800.5).abs() < 1e-6);

    let (t, rest) = split_capture_prefix("sync message: offset = 5");
    assert_eq!(t, None);
    assert_eq!(rest, "sync message: offset = 5");
}

#[test]
fn replayed_lines_keep_recorded_capture_time() {
    let parser = ReadingParser::new(SessionClock::start());

    let r = parser
        .parse_replayed("2026-10-16T10:00:00+00:00: sync message offset = 9")
        .unwrap();

    assert_eq!(r.capture_time, 1_792_144_800.0);
    assert_eq!(r.sync_offset, Some(9.0));
}
