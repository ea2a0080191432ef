use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use tokio::sync::Notify;

/// Analysis trigger with at-most-one pass in flight.
///
/// Firing while a pass runs drops the trigger instead of queueing it.
#[derive(Debug, Default)]
pub struct AnalysisTrigger {
    notify: Notify,
    busy: AtomicBool,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    fired: AtomicU64,
    dropped: AtomicU64,
}

impl AnalysisTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wake the scheduler unless a pass is already running.
    ///
    /// Returns `false` when the trigger was dropped.
    pub fn fire(&self) -> bool {
        if self.busy.load(Ordering::Acquire) {
            let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::debug!(dropped, "analysis busy, trigger dropped");
            return false;
        }
        self.fired.fetch_add(1, Ordering::Relaxed);
        self.notify.notify_one();
        true
    }

    pub async fn notified(&self) {
        self.notify.notified().await;
    }

    /// Claim the single analysis slot.
    pub fn begin(&self) -> Option<InFlightGuard<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        let now = self.in_flight.fetch_add(1, Ordering::AcqRel) + 1;
        self.max_in_flight.fetch_max(now, Ordering::AcqRel);

        Some(InFlightGuard { trigger: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn stats(&self) -> TriggerStats {
        TriggerStats {
            fired: self.fired.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            max_in_flight: self.max_in_flight.load(Ordering::Relaxed),
        }
    }
}

/// RAII guard for the single analysis slot.
///
/// Invariants:
/// - Only created by [`AnalysisTrigger::begin`] after the slot was claimed
/// - The slot is released exactly once on Drop
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    trigger: &'a AnalysisTrigger,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.trigger.in_flight.fetch_sub(1, Ordering::AcqRel);
        self.trigger.busy.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TriggerStats {
    pub fired: u64,
    pub dropped: u64,
    pub max_in_flight: usize,
}
