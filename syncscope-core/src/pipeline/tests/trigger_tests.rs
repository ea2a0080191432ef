use crate::pipeline::{AnalysisTrigger, TriggerStats};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn only_one_pass_holds_the_slot() {
    let trigger = AnalysisTrigger::new();

    let guard = trigger.begin();
    assert!(guard.is_some());
    assert!(trigger.is_busy());
    assert!(trigger.begin().is_none());

    drop(guard);
    assert!(!trigger.is_busy());
    assert!(trigger.begin().is_some());
}

#[test]
fn fire_while_busy_is_dropped() {
    let trigger = AnalysisTrigger::new();
    let _guard = trigger.begin().unwrap();

    assert!(!trigger.fire());
    assert!(!trigger.fire());

    assert_eq!(
        trigger.stats(),
        TriggerStats {
            fired: 0,
            dropped: 2,
            max_in_flight: 1,
        }
    );
}

#[tokio::test]
async fn fire_wakes_a_later_waiter() {
    let trigger = AnalysisTrigger::new();

    assert!(trigger.fire());

    tokio::time::timeout(Duration::from_secs(1), trigger.notified())
        .await
        .expect("stored permit wakes the scheduler");
}

#[tokio::test]
async fn repeated_fires_coalesce_into_one_wakeup() {
    let trigger = AnalysisTrigger::new();
    trigger.fire();
    trigger.fire();

    trigger.notified().await;
    let second = tokio::time::timeout(Duration::from_millis(50), trigger.notified()).await;

    assert!(second.is_err());
}
