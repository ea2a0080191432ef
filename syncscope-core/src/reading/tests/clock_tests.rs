use crate::reading::SessionClock;
use crate::reading::clock::{from_rfc3339, to_rfc3339};

#[test]
fn session_clock_is_monotonic() {
    let clock = SessionClock::start();

    let a = clock.now();
    let b = clock.now();

    assert!(b >= a);
    assert!(a >= clock.started_at());
}

#[test]
fn rfc3339_conversion_keeps_sub_second_precision() {
    let t = 1_792_144_800.25;

    let s = to_rfc3339(t);
    let back = from_rfc3339(&s).unwrap();

    assert!((back - t).abs() < 1e-6);
}
